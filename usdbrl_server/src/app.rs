//! HTTP surface of the quote server.
//!
//! A single route, `GET /cotacao`, runs the whole relay for one request: fetch upstream,
//! append to the store, answer with the bid. Any failure short-circuits into
//! [`ServerError`], which renders as a bare 500.
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{debug, info};
use tokio::time::timeout;
use usdbrl_common::BidResponse;
use usdbrl_common::net::QUOTE_PATH;

use crate::error::ServerError;
use crate::store::{QuoteRecord, QuoteStore};
use crate::upstream::UpstreamClient;

/// State shared by every request handler.
pub struct AppState {
    /// Process-wide quote database.
    pub store: QuoteStore,
    /// Upstream provider client, already carrying its own deadline.
    pub upstream: UpstreamClient,
    /// Deadline for the per-request insert.
    pub store_timeout: Duration,
}

/// Build the router serving [`QUOTE_PATH`].
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

/// GET /cotacao - fetch, record and relay the latest bid.
async fn get_quote(State(state): State<Arc<AppState>>) -> Result<Response, ServerError> {
    debug!("Quote request received");
    let quote = state.upstream.fetch_quote().await?;
    let item = &quote.usdbrl;

    let record = QuoteRecord::from(item);
    // Missing the deadline drops the insert before its commit, so the row is rolled back.
    timeout(state.store_timeout, state.store.insert(&record))
        .await
        .map_err(|_| ServerError::StoreDeadline(state.store_timeout))??;
    info!(
        "Stored {}/{} quote: bid={} ask={} at {}",
        item.code, item.codein, item.bid, item.ask, item.create_date
    );

    let body = serde_json::to_vec(&BidResponse::from(item))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
