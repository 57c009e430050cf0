//! Command-line arguments for the Quote Server.
//!
//! Every option defaults to the fixed values in `usdbrl_common::net`, so a bare
//! `usdbrl_server` listens on port 8080 and writes to `./cotacao.db`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use usdbrl_common::net::{DB_PATH, SERVER_PORT, STORE_TIMEOUT, UPSTREAM_TIMEOUT, UPSTREAM_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TCP port to listen on (bound on all interfaces).
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite file holding the `cotacoes` table. Created if missing.
    #[clap(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Upstream endpoint returning the latest USD/BRL quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Deadline for the upstream call, in milliseconds.
    #[clap(long, default_value_t = UPSTREAM_TIMEOUT.as_millis() as u64)]
    pub upstream_timeout_ms: u64,

    /// Deadline for a single store insert, in milliseconds.
    #[clap(long, default_value_t = STORE_TIMEOUT.as_millis() as u64)]
    pub store_timeout_ms: u64,
}

impl Args {
    /// Upstream deadline as a `Duration`.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Insert deadline as a `Duration`; also bounds SQLite lock waits.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_configuration() {
        let args = Args::parse_from(["usdbrl_server"]);

        assert_eq!(args.port, 8080);
        assert_eq!(args.db_path, PathBuf::from("cotacao.db"));
        assert_eq!(args.upstream_url, UPSTREAM_URL);
        assert_eq!(args.upstream_timeout(), Duration::from_millis(200));
        assert_eq!(args.store_timeout(), Duration::from_millis(10));
    }

    #[test]
    fn options_override_defaults() {
        let args = Args::parse_from([
            "usdbrl_server",
            "--port",
            "9090",
            "--store-timeout-ms",
            "50",
        ]);

        assert_eq!(args.port, 9090);
        assert_eq!(args.store_timeout(), Duration::from_millis(50));
    }
}
