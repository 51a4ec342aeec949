//! Repetition section - detects runs of identical consecutive characters.

use crate::policy::PasswordPolicy;
use super::SectionResult;

/// Checks that no character repeats more than `max_run` times in a row.
///
/// Only adjacent positions count; the same character elsewhere in the
/// password starts a new run.
///
/// # Returns
/// - `Some(reason)` if a run longer than `max_run` is found
/// - `None` otherwise
pub fn repetition_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    let max_run = policy.max_run();
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run > max_run {
                return Some(format!(
                    "Password contains more than {} identical characters in a row",
                    max_run
                ));
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    None
}
