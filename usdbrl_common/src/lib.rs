//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `quote`: upstream quote document, its USD/BRL item and the bid-only response.
//! - `http`: deadline-bounded JSON GET shared by both processes.
//! - `net`: fixed endpoints, ports, deadlines and file names.
#![warn(missing_docs)]
pub mod error;
pub mod http;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{BidResponse, Quote, QuoteItem};
pub use result::Result;
