//! Password policy evaluator - runs every section and folds them into a verdict.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{DEFAULT_POLICY, PasswordPolicy};
use crate::sections::{
    SectionResult, character_variety_section, charset_section, length_section, repetition_section,
};

type Section = fn(&PasswordPolicy, &str) -> SectionResult;

// Charset and length first: they reject most malformed input on their own.
const SECTIONS: [(&str, Section); 4] = [
    ("charset", charset_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("repetition", repetition_section),
];

/// Checks `password` against the default policy.
///
/// Returns `true` only if every rule passes. Never panics, whatever the input.
///
/// ```rust
/// use pwd_policy::validate_password;
///
/// assert!(validate_password("Abc1defgh$"));
/// assert!(!validate_password("Abc1defg!"));
/// ```
pub fn validate_password(password: &str) -> bool {
    DEFAULT_POLICY.evaluate(password)
}

/// Same as [`validate_password`] for a password held as a secret.
pub fn validate_secret_password(password: &SecretString) -> bool {
    DEFAULT_POLICY.evaluate_secret(password)
}

impl PasswordPolicy {
    /// Returns `true` if `password` satisfies every rule of this policy.
    pub fn evaluate(&self, password: &str) -> bool {
        self.run_sections(password, || false).unwrap_or(false)
    }

    pub fn evaluate_secret(&self, password: &SecretString) -> bool {
        self.evaluate(password.expose_secret())
    }

    /// Evaluates with an optional cancellation token checked before each section.
    ///
    /// # Returns
    /// `None` if the token was cancelled, otherwise `Some(verdict)`.
    #[cfg(feature = "async")]
    pub fn evaluate_cancellable(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Option<bool> {
        self.run_sections(password.expose_secret(), || {
            token.as_ref().is_some_and(|t| t.is_cancelled())
        })
    }

    // Orchestrator: stops at the first rejecting section
    fn run_sections(&self, password: &str, mut is_cancelled: impl FnMut() -> bool) -> Option<bool> {
        for (section_name, section_fn) in SECTIONS {
            if is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password evaluation cancelled before section: {}", section_name);
                return None;
            }

            if let Some(reason) = section_fn(self, password) {
                #[cfg(feature = "tracing")]
                tracing::debug!(section = section_name, "Password rejected: {}", reason);
                #[cfg(not(feature = "tracing"))]
                let _ = (section_name, reason);
                return Some(false);
            }
        }

        Some(true)
    }
}

/// Async version that sends the verdict via channel.
///
/// Nothing is sent if `token` is cancelled before evaluation completes.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<bool>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password validation is about to start...");

    let Some(verdict) = DEFAULT_POLICY.evaluate_cancellable(password, Some(token)) else {
        return;
    };

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
