//! Server-side error type.
//!
//! Every variant maps to the same bare `500 Internal Server Error` with no body; the
//! distinguishing detail only goes to the log.
use std::io;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;
use usdbrl_common::QuoteError;

/// Failures of the server process and of a single quote request.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Upstream call failed: transport, deadline, status or decode.
    #[error("Upstream quote fetch failed: {0}")]
    Fetch(#[from] QuoteError),

    /// SQLite open, schema or insert failure.
    #[error("Quote store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Insert did not finish within its deadline.
    #[error("Quote store insert exceeded its {0:?} deadline")]
    StoreDeadline(Duration),

    /// Response body could not be encoded.
    #[error("Response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Socket or filesystem error during startup.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Quote request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
