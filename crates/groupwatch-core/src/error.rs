//! Core error types for groupwatch-core.
//!
//! The checker itself cannot fail; every error originates in the lookup
//! collaborator and is propagated to the caller unchanged. There is no
//! retry and no fallback status -- a status is either computed or the whole
//! operation fails.

use thiserror::Error;

/// Failures surfaced by a [`crate::lookup::LastEventLookup`] collaborator.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The backing store failed to answer.
    #[error("Lookup backend failed: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The lookup did not complete in time.
    #[error("Lookup timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The caller cancelled the lookup.
    #[error("Lookup cancelled")]
    Cancelled,
}

impl LookupError {
    /// Backend failure with a message and no underlying cause.
    pub fn backend(message: impl Into<String>) -> Self {
        LookupError::Backend {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type alias for LookupError
pub type Result<T, E = LookupError> = std::result::Result<T, E>;
