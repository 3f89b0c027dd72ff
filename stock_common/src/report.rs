//! Per-ticker report model written to the output artifact.
//!
//! Each requested ticker produces exactly one `TickerReport`: either the
//! summary statistics over its closing-price series, or the description of
//! the error that exhausted the retry budget. Reports serialize to flat
//! JSON objects, `{"ticker", "min", "max", "avg", "median"}` on success and
//! `{"ticker", "error"}` on failure.

use serde::Serialize;

use crate::summary::PriceSummary;
use crate::tickers::Ticker;

/// Outcome of fetching and summarizing a single ticker.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TickerReport {
    /// Fetch succeeded; carries the summary statistics for the window.
    Summary {
        /// Ticker the statistics belong to.
        ticker: Ticker,
        /// Computed summary statistics, flattened into the report object.
        #[serde(flatten)]
        summary: PriceSummary,
    },
    /// Every attempt failed; carries the last error's description.
    Failure {
        /// Ticker that could not be fetched.
        ticker: Ticker,
        /// Human-readable description of the last error.
        error: String,
    },
}

impl TickerReport {
    /// Wraps the summary statistics computed for `ticker`.
    pub fn summary(ticker: Ticker, summary: PriceSummary) -> Self {
        TickerReport::Summary { ticker, summary }
    }

    /// Records the last error seen for `ticker` after the retry budget
    /// ran out.
    pub fn failure(ticker: Ticker, error: impl Into<String>) -> Self {
        TickerReport::Failure {
            ticker,
            error: error.into(),
        }
    }

    /// Returns `true` for the success variant.
    pub fn is_summary(&self) -> bool {
        matches!(self, TickerReport::Summary { .. })
    }

    /// Ticker this report belongs to.
    pub fn ticker(&self) -> &Ticker {
        match self {
            TickerReport::Summary { ticker, .. } => ticker,
            TickerReport::Failure { ticker, .. } => ticker,
        }
    }
}
