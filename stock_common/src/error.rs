//! Error types shared across the workspace.
//!
//! The `QuoteError` enum unifies common failure cases for file I/O, HTTP
//! transport, serialization, and response validation, allowing crates to
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the workspace crates.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (files, streams).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transport error: connection failure, timeout, or a non-2xx
    /// status surfaced via `error_for_status`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Upstream response body did not contain the expected quote-rows table.
    #[error("No valid data found for {0}")]
    MalformedResponse(String),

    /// Every row of the upstream response lacked a usable closing price.
    #[error("No closing prices available for {0}")]
    NoClosingPrices(String),

    /// Error while parsing a ticker symbol supplied on the command line.
    #[error("Parse ticker error: {0}")]
    ParseTicker(String),
}
