//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` has its own variant because callers routinely branch on it.
//! Both `NotFound` and `Http` carry the server's `detail` message when the
//! body has one, so it can be shown to the user as-is.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; carries its message.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
