//! The error chain: an immutable, append-only list of classified nodes.
//!
//! Every node holds a lower-cased message, a lower-cased code, and at most
//! one exclusively owned cause. Chains are built bottom-up as errors
//! surface through layers: each layer that adds context wraps the previous
//! error instead of discarding it, so the full causal history stays
//! available for diagnosis while callers classify on the head node's code
//! alone.

use std::error::Error as StdError;
use std::fmt;
use std::sync::OnceLock;

/// A classified error node with an optional cause chain.
///
/// Nodes are immutable once constructed. [`Error::wrap`] never rewires an
/// existing node; it consumes the receiver and returns the rebuilt chain
/// with a fresh terminal node appended, which keeps chains cycle-free and
/// safe to hand across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    message: String,
    code: String,
    cause: Option<Box<Error>>,
}

impl Error {
    /// Creates a terminal node with no cause.
    ///
    /// Both the message and the code are normalized to lowercase; no node
    /// ever stores mixed-case text.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into().to_lowercase(),
            code: code.into().to_lowercase(),
            cause: None,
        }
    }

    /// Creates a node that already wraps `cause`.
    ///
    /// Shorthand for `Error::new(message, code).wrap(Some(cause))`.
    pub fn with_cause(
        message: impl Into<String>,
        code: impl Into<String>,
        cause: &dyn StdError,
    ) -> Self {
        Self::new(message, code).wrap(Some(cause))
    }

    /// Appends `cause` as a new terminal node at the tail of the chain.
    ///
    /// The appended node stores the cause's rendered text under the code of
    /// its immediate predecessor: the call recurses down the chain, and the
    /// node that has no cause yet is the one that donates its code to the
    /// new tail. Existing nodes keep their own message and code untouched.
    ///
    /// Wrapping `None` is the identity. `wrap` itself never fails.
    pub fn wrap(mut self, cause: Option<&dyn StdError>) -> Self {
        let Some(cause) = cause else {
            return self;
        };
        match self.cause.take() {
            Some(inner) => {
                self.cause = Some(Box::new(inner.wrap(Some(cause))));
            }
            None => {
                let tail = Error::new(cause.to_string(), self.code.clone());
                self.cause = Some(Box::new(tail));
            }
        }
        self
    }

    /// The node's message, already lower-cased.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The node's classification code, already lower-cased.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The direct cause, one hop down the chain. `None` at the tail.
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as _)
    }
}

static UNKNOWN: OnceLock<Error> = OnceLock::new();

/// The reserved sentinel used when no more specific error applies.
pub fn unknown() -> &'static Error {
    UNKNOWN.get_or_init(|| Error::new("unknown error", "errors_unknown"))
}
