//! Password policy configuration
//!
//! Holds the composition rules a candidate is checked against.

use std::borrow::Cow;
use thiserror::Error;

/// Minimum length in UTF-16 code units.
pub const MIN_LENGTH: usize = 10;

/// Longest allowed run of identical consecutive characters.
pub const MAX_RUN: usize = 2;

/// Special characters accepted by the default policy.
pub const SPECIAL_CHARS: &str = "@$!#%*?&";

pub(crate) const CLASS_COUNT: usize = 4;

/// The fixed process-wide policy used by [`crate::validate_password`].
pub static DEFAULT_POLICY: PasswordPolicy = PasswordPolicy::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Special character set is empty")]
    EmptySpecialSet,
    #[error("Invalid special character: {0:?}")]
    InvalidSpecialChar(char),
    #[error("Maximum run length must be at least 1, got {0}")]
    InvalidMaxRun(usize),
    #[error("Required character classes must be between 1 and 4, got {0}")]
    InvalidMinClasses(usize),
}

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; CLASS_COUNT] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub(crate) const fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 0b0001,
            CharClass::Uppercase => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Special => 0b1000,
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "numbers",
            CharClass::Special => "special characters",
        }
    }
}

/// Composition rules for a password.
///
/// The default value is the fixed policy: at least 10 characters, only
/// `A-Z a-z 0-9 @ $ ! # % * ? &`, all four character classes present and no
/// character repeated more than twice in a row.
///
/// # Example
///
/// ```rust
/// use pwd_policy::PasswordPolicy;
///
/// let policy = PasswordPolicy::new()
///     .with_min_classes(3)?
///     .with_special_chars("@$!#%*?&^_-")?;
///
/// assert!(policy.evaluate("abc1defgh^"));
/// # Ok::<(), pwd_policy::PolicyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_run: usize,
    min_classes: usize,
    special_chars: Cow<'static, str>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPolicy {
    pub const fn new() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_run: MAX_RUN,
            min_classes: CLASS_COUNT,
            special_chars: Cow::Borrowed(SPECIAL_CHARS),
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the longest allowed run of identical consecutive characters.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidMaxRun`] for `0`.
    pub fn with_max_run(mut self, max_run: usize) -> Result<Self, PolicyError> {
        if max_run == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected policy setting: max_run = {}", max_run);
            return Err(PolicyError::InvalidMaxRun(max_run));
        }
        self.max_run = max_run;
        Ok(self)
    }

    /// Sets how many of the four character classes must be present.
    ///
    /// `4` requires every class, `3` gives the "3 of 4" policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidMinClasses`] outside `1..=4`.
    pub fn with_min_classes(mut self, min_classes: usize) -> Result<Self, PolicyError> {
        if !(1..=CLASS_COUNT).contains(&min_classes) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected policy setting: min_classes = {}", min_classes);
            return Err(PolicyError::InvalidMinClasses(min_classes));
        }
        self.min_classes = min_classes;
        Ok(self)
    }

    /// Replaces the special character set.
    ///
    /// Every character must be ASCII punctuation. Duplicates are dropped.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::EmptySpecialSet`] if `chars` is empty
    /// - [`PolicyError::InvalidSpecialChar`] for letters, digits, whitespace
    ///   or anything outside ASCII
    pub fn with_special_chars(mut self, chars: &str) -> Result<Self, PolicyError> {
        if chars.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected policy setting: empty special character set");
            return Err(PolicyError::EmptySpecialSet);
        }

        let mut set = String::with_capacity(chars.len());
        for c in chars.chars() {
            if !c.is_ascii_punctuation() {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected policy setting: special character {:?}", c);
                return Err(PolicyError::InvalidSpecialChar(c));
            }
            if !set.contains(c) {
                set.push(c);
            }
        }

        self.special_chars = Cow::Owned(set);
        Ok(self)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_run(&self) -> usize {
        self.max_run
    }

    pub fn min_classes(&self) -> usize {
        self.min_classes
    }

    pub fn special_chars(&self) -> &str {
        &self.special_chars
    }

    pub fn is_special(&self, c: char) -> bool {
        c.is_ascii() && self.special_chars.contains(c)
    }

    /// Returns `true` if `c` may appear in a password under this policy.
    pub fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.is_special(c)
    }

    /// Classifies `c`, or `None` if it is outside the allowed set.
    pub fn classify(&self, c: char) -> Option<CharClass> {
        if c.is_ascii_lowercase() {
            Some(CharClass::Lowercase)
        } else if c.is_ascii_uppercase() {
            Some(CharClass::Uppercase)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if self.is_special(c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }
}
