//! Password composition policy library
//!
//! Checks a candidate password against a fixed composition policy and
//! returns a single accept/reject verdict. No reason is given to the caller.
//!
//! The default policy requires:
//!
//! - at least 10 characters (UTF-16 code units)
//! - only `A-Z`, `a-z`, `0-9` and `@ $ ! # % * ? &`
//! - at least one lowercase, one uppercase, one digit and one special character
//! - no character repeated more than twice in a row
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with cancellation support
//! - `tracing`: Logs the rejecting rule via tracing crate (never the password)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{validate_password, validate_secret_password};
//! use secrecy::SecretString;
//!
//! assert!(validate_password("AAbb11$$Cc"));
//! assert!(!validate_password("AAAbb11^%c"));
//!
//! let password = SecretString::new("Abc1defgh$".to_string().into());
//! assert!(validate_secret_password(&password));
//! ```

// Internal modules
mod evaluator;
mod policy;
mod sections;

#[cfg(test)]
mod proptest;

// Public API
pub use evaluator::{validate_password, validate_secret_password};
pub use policy::{
    CharClass, DEFAULT_POLICY, MAX_RUN, MIN_LENGTH, PasswordPolicy, PolicyError, SPECIAL_CHARS,
};

#[cfg(feature = "async")]
pub use evaluator::validate_password_tx;
