//!
//! Common types shared by the stock statistics workspace.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `tickers`: ticker symbol type and its normalization rules.
//! - `summary`: summary statistics over a closing-price series.
//! - `report`: per-ticker report model written to the output artifact.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tickers;
pub mod summary;
pub mod report;

pub use error::QuoteError;
pub use result::Result;
pub use report::TickerReport;
