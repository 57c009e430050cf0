//! Retrieving the latest bid from the quote server.
use std::time::Duration;

use log::{debug, info};
use usdbrl_common::BidResponse;
use usdbrl_common::Result;
use usdbrl_common::http::DeadlineClient;

/// GET the bid from `server_url`, abandoning the call after `deadline`.
///
/// Transport, deadline, non-success status and decode failures are all returned as errors;
/// the caller treats any of them as the end of the run.
pub async fn fetch_quote(server_url: &str, deadline: Duration) -> Result<BidResponse> {
    let client = DeadlineClient::new(deadline)?;
    info!(
        "Requesting quote from {} (deadline {:?})",
        server_url, deadline
    );

    let quote: BidResponse = client.get_json(server_url).await?;
    debug!("Received bid {}", quote.bid);
    Ok(quote)
}
