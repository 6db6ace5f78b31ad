//! Chain membership predicates.
//!
//! Two distinct questions are answered here: "does this chain, at any hop,
//! match a given target?" ([`is`], [`one_of`]) and "is this error exactly
//! this one node, with nothing wrapped under it?" ([`is_only`]).

use std::error::Error as StdError;

use super::chain::Error;

/// Capability for error types that define their own equality against a
/// target. The chain-walking traversal invokes this at every hop.
pub trait Matches {
    /// Whether this node should be considered equal to `target`.
    fn matches(&self, target: &dyn StdError) -> bool;
}

impl Matches for Error {
    /// Message equality: not code equality and not identity. Two
    /// independently constructed errors with the same message text but
    /// different codes are equal under this predicate.
    fn matches(&self, target: &dyn StdError) -> bool {
        self.message() == target.to_string()
    }
}

/// Tells whether any hop of `err`'s chain matches `target`.
pub fn is(err: &Error, target: &dyn StdError) -> bool {
    let mut node = Some(err);
    while let Some(current) = node {
        if current.matches(target) {
            return true;
        }
        node = current.cause();
    }
    false
}

/// Tells whether `err`'s chain matches any of `targets`.
///
/// The chain is walked once per target. An empty target list is false
/// unconditionally.
pub fn one_of(err: &Error, targets: &[&dyn StdError]) -> bool {
    if targets.is_empty() {
        return false;
    }
    targets.iter().any(|target| is(err, *target))
}

/// Tells whether `err` is exactly `target` and nothing more: the values
/// compare equal, the node-local [`Matches`] accepts the target, and the
/// node has no further cause. A chain of length two or more always fails,
/// even against its own head.
///
/// An absent target short-circuits to a presence check on `err`, bypassing
/// the match and cause logic entirely.
pub fn is_only(err: Option<&Error>, target: Option<&Error>) -> bool {
    let Some(target) = target else {
        return err.is_none();
    };
    let Some(err) = err else {
        return false;
    };
    if err != target {
        return false;
    }
    if !err.matches(target) {
        return false;
    }
    err.cause().is_none()
}
