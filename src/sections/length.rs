//! Length section - checks password minimum length.

use crate::policy::PasswordPolicy;
use super::SectionResult;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// basic multilingual plane counts twice.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    let min = policy.min_length();
    if password.encode_utf16().take(min).count() < min {
        return Some(format!("Password must be at least {} characters", min));
    }
    None
}
