//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. Without flags the client asks
//! `http://localhost:8080/cotacao` with a 300 ms deadline and writes `./cotacao.txt`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use usdbrl_common::net::{CLIENT_TIMEOUT, OUTPUT_PATH, default_server_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote server's quote route.
    #[clap(long, default_value_t = default_server_url())]
    pub server_url: String,

    /// Deadline for the whole server call, in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// File to (over)write with the received bid.
    #[clap(long, default_value = OUTPUT_PATH)]
    pub output: PathBuf,
}

impl Args {
    /// Server call deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
