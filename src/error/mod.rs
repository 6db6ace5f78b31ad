//! Code-tagged error chains.
//!
//! This module provides the toolkit's error representation: a chain of
//! classified nodes, each carrying a human-readable message and a stable
//! machine-readable code, plus the comparison helpers layered on top.
//! Codes are what programmatic consumers branch on (HTTP status mapping,
//! retry decisions, alert routing); messages are for humans and logs.

pub mod chain;
pub mod matching;

// Re-export main types for convenient access
pub use chain::{unknown, Error};
pub use matching::{is, is_only, one_of, Matches};
