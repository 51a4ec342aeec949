//! Property-based tests for the default policy.
//!
//! These tests use proptest to verify that:
//! - short candidates are always rejected
//! - any character outside the allowed set rejects
//! - well-formed candidates are accepted
//! - runs of three or more reject an otherwise valid candidate
//! - evaluation is deterministic

use crate::policy::{DEFAULT_POLICY, MIN_LENGTH};
use crate::validate_password;
use proptest::prelude::*;

const ALLOWED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@$!#%*?&";

// ============================================================================
// Strategies
// ============================================================================

fn arb_allowed_char() -> impl Strategy<Value = char> {
    prop::sample::select(ALLOWED.chars().collect::<Vec<_>>())
}

fn arb_disallowed_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be outside the allowed set", |c| {
        !DEFAULT_POLICY.is_allowed(*c)
    })
}

/// Strategy for candidates that satisfy every rule of the default policy.
fn arb_valid_password() -> impl Strategy<Value = String> {
    (
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        prop::sample::select("@$!#%*?&".chars().collect::<Vec<_>>()),
        prop::collection::vec(arb_allowed_char(), 6..40),
        any::<prop::sample::Index>(),
    )
        .prop_map(|(lower, upper, digit, special, mut rest, idx)| {
            let at = idx.index(rest.len() + 1);
            rest.insert(at, lower);
            rest.push(upper);
            rest.insert(0, digit);
            rest.push(special);
            rest.into_iter().collect::<String>()
        })
        .prop_filter("no run of three identical characters", |s| longest_run(s) <= 2)
}

fn longest_run(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunk_by(|a, b| a == b)
        .map(<[char]>::len)
        .max()
        .unwrap_or(0)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Anything shorter than the minimum length is rejected.
    #[test]
    fn short_candidates_are_rejected(s in prop::collection::vec(arb_allowed_char(), 0..MIN_LENGTH)) {
        let s: String = s.into_iter().collect();
        prop_assert!(!validate_password(&s));
    }

    /// Arbitrary strings never panic and are stable across calls.
    #[test]
    fn evaluation_is_deterministic(s in any::<String>()) {
        prop_assert_eq!(validate_password(&s), validate_password(&s));
    }

    /// Well-formed candidates are accepted.
    #[test]
    fn valid_candidates_are_accepted(s in arb_valid_password()) {
        prop_assert!(validate_password(&s), "expected {:?} to be accepted", s);
    }

    /// A single disallowed character rejects an otherwise valid candidate.
    #[test]
    fn disallowed_char_rejects(
        s in arb_valid_password(),
        bad in arb_disallowed_char(),
        idx in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        let at = idx.index(chars.len() + 1);
        chars.insert(at, bad);
        let s: String = chars.into_iter().collect();
        prop_assert!(!validate_password(&s), "expected {:?} to be rejected", s);
    }

    /// Inserting a run of 3 or 4 identical characters rejects.
    #[test]
    fn long_run_rejects(
        s in arb_valid_password(),
        c in arb_allowed_char(),
        len in 3usize..=4,
        idx in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        let at = idx.index(chars.len() + 1);
        for _ in 0..len {
            chars.insert(at, c);
        }
        let s: String = chars.into_iter().collect();
        prop_assert!(longest_run(&s) >= 3);
        prop_assert!(!validate_password(&s), "expected {:?} to be rejected", s);
    }

    /// Doubling a character that has no equal neighbour keeps the verdict.
    #[test]
    fn pair_does_not_reject(s in arb_valid_password(), idx in any::<prop::sample::Index>()) {
        let mut chars: Vec<char> = s.chars().collect();
        let at = idx.index(chars.len());
        let c = chars[at];
        let isolated = (at == 0 || chars[at - 1] != c)
            && chars.get(at + 1).is_none_or(|&next| next != c);
        prop_assume!(isolated);
        chars.insert(at, c);
        let s: String = chars.into_iter().collect();
        prop_assert!(validate_password(&s), "expected {:?} to be accepted", s);
    }
}
