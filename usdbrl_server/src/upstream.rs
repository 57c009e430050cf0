//! Client for the external quote provider.
use std::time::Duration;

use usdbrl_common::Quote;
use usdbrl_common::Result;
use usdbrl_common::http::DeadlineClient;

/// Fetches the current USD/BRL document from a fixed upstream URL.
#[derive(Debug)]
pub struct UpstreamClient {
    http: DeadlineClient,
    url: String,
}

impl UpstreamClient {
    /// Build a client for `url` whose requests are abandoned after `deadline`.
    pub fn new(url: &str, deadline: Duration) -> Result<Self> {
        Ok(Self {
            http: DeadlineClient::new(deadline)?,
            url: url.to_string(),
        })
    }

    /// Upstream endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET, no retry. Errors are returned as-is for the caller to log.
    pub async fn fetch_quote(&self) -> Result<Quote> {
        self.http.get_json(&self.url).await
    }
}
