//! Integration tests for the error chain.
//!
//! These exercise the public surface end-to-end: construction and
//! normalization, wrap/unwrap ordering, and the membership predicates
//! (`is`, `one_of`, `is_only`) that classification logic throughout a
//! service builds on.

use std::error::Error as StdError;

use groundwork::error::{is, is_only, one_of, unknown, Error};

// ============================================================================
// Construction and Normalization
// ============================================================================

#[test]
fn test_new_is_compatible_with_the_standard_error_trait() {
    let err = Error::new("An error message", "an_error_code");
    let as_std: &dyn StdError = &err;
    assert_eq!(as_std.to_string(), "an error message");
}

#[test]
fn test_new_lowers_all_messages_and_codes() {
    let err = Error::new("An Error Message", "An_Error_Code");
    assert_eq!(err.to_string(), "an error message");
    assert_eq!(err.code(), "an_error_code");
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_wrap_encapsulates_every_level() {
    let encapsulated = Error::new("error encapsulated", "an_error_code");
    let super_encapsulated = Error::new("super encapsulated error", "an_error_code");
    let super_duper_encapsulated = Error::new("super duper encapsulated error", "an_error_code");

    let err = Error::new("An error message", "an_error_code")
        .wrap(Some(&encapsulated))
        .wrap(Some(&super_encapsulated))
        .wrap(Some(&super_duper_encapsulated));

    assert!(is(&err, &encapsulated));
    assert!(is(&err, &super_encapsulated));
    assert!(is(&err, &super_duper_encapsulated));
}

#[test]
fn test_with_cause_encapsulates_the_error() {
    let encapsulated = Error::new("error encapsulated", "an_error_code");
    let err = Error::with_cause("an error", "code", &encapsulated);
    assert!(is(&err, &encapsulated));
}

#[test]
fn test_wrap_none_is_observably_the_identity() {
    let err = Error::new("an error", "a_code");
    let wrapped = err.clone().wrap(None);
    assert_eq!(wrapped.to_string(), err.to_string());
    assert_eq!(wrapped.code(), err.code());
    assert!(wrapped.cause().is_none());
    assert_eq!(wrapped, err);
}

#[test]
fn test_wrapping_keeps_the_head_untouched() {
    let a = Error::new("cause a", "ca");
    let b = Error::new("cause b", "cb");
    let c = Error::new("cause c", "cc");
    let err = Error::new("The Head", "head_code")
        .wrap(Some(&a))
        .wrap(Some(&b))
        .wrap(Some(&c));

    assert_eq!(err.to_string(), "the head");
    assert_eq!(err.code(), "head_code");
    assert!(one_of(&err, &[&a]));
    assert!(one_of(&err, &[&b]));
    assert!(one_of(&err, &[&c]));
}

#[test]
fn test_innermost_message_survives_two_further_wraps() {
    let original = Error::new("disk is on fire", "hw_failure");
    let err = Error::new("request failed", "request_failed")
        .wrap(Some(&original))
        .wrap(Some(&Error::new("retry exhausted", "retry_exhausted")))
        .wrap(Some(&Error::new("giving up", "gave_up")));

    let mut deepest = &err;
    while let Some(cause) = deepest.cause() {
        deepest = cause;
    }
    assert_eq!(deepest.to_string(), "giving up");

    // the original error's text is still a reachable hop
    assert!(is(&err, &original));
}

// ============================================================================
// Membership Predicates
// ============================================================================

#[test]
fn test_one_of_scenario() {
    let a = Error::new("error encapsulated", "code1");
    let b = Error::new("An Error Message", "code2").wrap(Some(&a));

    assert_eq!(b.to_string(), "an error message");
    assert_eq!(b.code(), "code2");
    assert!(one_of(&b, &[&a]));
    assert!(!is_only(Some(&b), Some(&a)));
    assert!(!is_only(Some(&b), Some(&b)));
}

#[test]
fn test_one_of_with_zero_targets_is_always_false() {
    let err = Error::new("an error", "a_code");
    assert!(!one_of(&err, &[]));
    assert!(!one_of(unknown(), &[]));
}

#[test]
fn test_is_only_returns_true_when_the_error_is_unique() {
    let err = unknown();
    assert!(is_only(Some(err), Some(err)));
}

#[test]
fn test_is_only_returns_false_when_there_is_another_error_wrapped() {
    let encapsulated = Error::new("error encapsulated", "an_error_code");
    let err = Error::with_cause("an error", "code", &encapsulated);
    assert!(!is_only(Some(&err), Some(&err)));
    assert!(!is_only(Some(&err), Some(&encapsulated)));
}

#[test]
fn test_is_only_nil_semantics() {
    let err = Error::new("an error", "a_code");
    assert!(is_only(None, None));
    assert!(!is_only(Some(&err), None));
    assert!(!is_only(None, Some(&err)));
}

#[test]
fn test_message_equality_beats_code_equality() {
    // two independently constructed errors with identical message text but
    // different codes are equal under the chain predicate
    let first = Error::new("duplicate key", "mongo_dup_key");
    let second = Error::new("Duplicate Key", "pg_unique_violation");
    assert!(is(&first, &second));
    assert!(one_of(&first, &[&second]));

    // but not under is_only, which also requires structural equality
    assert!(!is_only(Some(&first), Some(&second)));
}
