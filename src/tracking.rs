//! Request-tracking context.
//!
//! A [`TrackingContext`] carries the correlation identifier that ties a
//! request's log lines together. The identifier travels beside errors, as
//! a span field on everything logged while handling the request; it is
//! never embedded inside the error chain itself.

use tracing::Span;
use uuid::Uuid;

/// Carrier for a request's correlation identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingContext {
    tracking_id: String,
}

impl TrackingContext {
    /// Creates a context with a freshly generated tracking identifier.
    pub fn new() -> Self {
        Self {
            tracking_id: Uuid::new_v4().to_string(),
        }
    }

    /// Creates a context adopting an existing identifier, typically taken
    /// from an incoming request header. An empty identifier generates a
    /// fresh one instead.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            return Self::new();
        }
        Self { tracking_id: id }
    }

    /// The correlation identifier to track everything with.
    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    /// A span stamping the tracking identifier on every event recorded
    /// inside it.
    pub fn span(&self) -> Span {
        tracing::info_span!("request", trackingId = %self.tracking_id)
    }
}

impl Default for TrackingContext {
    fn default() -> Self {
        Self::new()
    }
}
