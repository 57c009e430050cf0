//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of a single quote round trip:
//! transport, deadline, HTTP status, JSON and file I/O. The server wraps it into its own
//! response-level error; the client propagates it straight out of `main`.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure reported by `reqwest` (connect, TLS, body read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within its deadline.
    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// The remote side answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl QuoteError {
    /// Classify a `reqwest` failure, turning timeouts into [`QuoteError::DeadlineExceeded`].
    pub fn from_request(err: reqwest::Error, deadline: Duration) -> Self {
        if err.is_timeout() {
            QuoteError::DeadlineExceeded(deadline)
        } else {
            QuoteError::Http(err)
        }
    }
}
