//! USD/BRL quote relay server.
//!
//! This binary serves `GET /cotacao` on `0.0.0.0:8080`. Each request is handled on its own
//! task by axum and runs the full relay:
//!
//! - `UpstreamClient`: fetches the latest USD/BRL document from the external provider with
//!   a 200 ms deadline.
//! - `QuoteStore`: appends the received quote to the `cotacoes` table of a local SQLite file
//!   with a 10 ms deadline.
//! - `app::router`: answers with `{"bid": "..."}` on success, or a bare 500 on any failure.
//!
//! Lifecycle:
//! - The store is opened once at startup and shared by every request through `AppState`.
//!   Failing to open it or to ensure the table aborts the process.
//! - There is no retry anywhere and no graceful shutdown; the server runs until killed.
//!
//! All endpoints, deadlines and paths default to the constants in `usdbrl_common::net` and can
//! be overridden from the command line (see `args`).
use crate::app::{AppState, router};
use crate::args::Args;
use crate::error::ServerError;
use crate::store::QuoteStore;
use crate::upstream::UpstreamClient;
use clap::Parser;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use usdbrl_common::net::addr;

mod app;
mod args;
mod error;
mod store;
mod upstream;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_logger();
    let args = Args::parse();

    let store = QuoteStore::connect(&args.db_path, args.store_timeout()).await?;
    info!(
        "Quote store ready at {} ({} quotes recorded)",
        args.db_path.display(),
        store.count().await?
    );

    let upstream = UpstreamClient::new(&args.upstream_url, args.upstream_timeout())?;
    info!(
        "Relaying quotes from {} (deadline {:?}, store deadline {:?})",
        upstream.url(),
        args.upstream_timeout(),
        args.store_timeout()
    );

    let state = Arc::new(AppState {
        store,
        upstream,
        store_timeout: args.store_timeout(),
    });

    let listener = TcpListener::bind(addr("0.0.0.0", args.port)).await?;
    info!("Quote server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
