//! Shared networking constants and helpers used by client and server.
//!
//! These are the fixed defaults of both processes; each binary exposes them as CLI
//! options so they can be overridden, but running without flags uses exactly these.
use std::time::Duration;

/// HTTP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the latest bid.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream provider returning the latest USD/BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Deadline for the server's upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);
/// Deadline for a single store insert.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Deadline for the client's call to the server.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);
/// SQLite file used by the server.
pub const DB_PATH: &str = "cotacao.db";
/// File written by the client.
pub const OUTPUT_PATH: &str = "cotacao.txt";

/// Helper to format a host and port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Default URL the client queries: `http://localhost:8080/cotacao`.
pub fn default_server_url() -> String {
    format!("http://{}{}", addr("localhost", SERVER_PORT), QUOTE_PATH)
}
