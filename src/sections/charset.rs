//! Charset section - rejects characters outside the allowed set.

use crate::policy::PasswordPolicy;
use super::SectionResult;

/// Checks that every character is an ASCII letter, an ASCII digit or one of
/// the policy's special characters.
///
/// # Returns
/// - `Some(reason)` if a disallowed character is present
/// - `None` if all characters are allowed
pub fn charset_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    if let Some(pos) = password.chars().position(|c| !policy.is_allowed(c)) {
        return Some(format!(
            "Password contains a disallowed character at position {}",
            pos
        ));
    }
    None
}
