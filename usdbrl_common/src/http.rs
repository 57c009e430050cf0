//! Deadline-bounded JSON GET used by both sides of the relay.
//!
//! The deadline is set as the `reqwest` client timeout, so it covers connecting, waiting
//! for headers and reading the body. Expiry is reported as
//! [`QuoteError::DeadlineExceeded`], anything else on the wire as [`QuoteError::Http`].
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{QuoteError, Result};

/// HTTP client whose every request is abandoned after a fixed deadline.
#[derive(Debug, Clone)]
pub struct DeadlineClient {
    client: Client,
    deadline: Duration,
}

impl DeadlineClient {
    /// Build a client with the given per-request deadline.
    pub fn new(deadline: Duration) -> Result<Self> {
        let client = Client::builder().timeout(deadline).build()?;
        Ok(Self { client, deadline })
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Non-success statuses fail with [`QuoteError::Status`] before the body is decoded.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {} (deadline {:?})", url, self.deadline);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::from_request(e, self.deadline))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::from_request(e, self.deadline))?;
        debug!("{} answered {} with {} bytes", url, status, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
