//! Ticker symbol type and normalization rules.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QuoteError;

/// Ticker symbol, normalized to ASCII uppercase at construction.
///
/// Symbols are free-form: any non-empty token is accepted, so `aapl` and
/// `AAPL` name the same instrument. Whether the symbol actually exists is
/// decided by the upstream data provider, not here.
#[derive(Debug, Clone, Serialize, Hash, Eq, PartialEq)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from a raw symbol, trimming surrounding whitespace
    /// and uppercasing. An empty or whitespace-only symbol is rejected.
    pub fn new(raw: &str) -> Result<Self, QuoteError> {
        let symbol = raw.trim();
        if symbol.is_empty() {
            return Err(QuoteError::ParseTicker(
                "empty ticker symbol".to_string(),
            ));
        }
        Ok(Ticker(symbol.to_ascii_uppercase()))
    }

    /// The normalized symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticker::new(s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
