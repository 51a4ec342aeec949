//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use crate::policy::{CharClass, PasswordPolicy};
use super::SectionResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ClassSet(u8);

impl ClassSet {
    fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Checks if the password draws from enough character classes.
///
/// # Returns
/// - `Some(reason)` if fewer than `min_classes` classes are present
/// - `None` otherwise
pub fn character_variety_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    let mut seen = ClassSet::default();
    for class in password.chars().filter_map(|c| policy.classify(c)) {
        seen.insert(class);
        if seen.len() == CharClass::ALL.len() {
            break;
        }
    }

    if seen.len() < policy.min_classes() {
        let missing: Vec<_> = CharClass::ALL
            .into_iter()
            .filter(|&class| !seen.contains(class))
            .map(CharClass::label)
            .collect();
        return Some(format!(
            "Only {} of {} required character types, missing: {}",
            seen.len(),
            policy.min_classes(),
            missing.join(", ")
        ));
    }
    None
}
