//! Summary statistics over a closing-price series.
//!
//! `summarize` reduces a non-empty series of closing prices into its
//! minimum, maximum, arithmetic mean, and median. It is a pure function
//! with no knowledge of where the prices came from.

use serde::Serialize;

/// Summary statistics for one ticker's closing-price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Lowest closing price in the window.
    pub min: f64,
    /// Highest closing price in the window.
    pub max: f64,
    /// Arithmetic mean of all closing prices, unrounded.
    pub avg: f64,
    /// Median closing price: the middle element of the sorted series, or
    /// the mean of the two middle elements for an even-length series.
    pub median: f64,
}

/// Computes summary statistics over a closing-price series.
///
/// The series must be non-empty; callers guarantee this before delegating
/// here, so an empty slice is a programming error.
pub fn summarize(prices: &[f64]) -> PriceSummary {
    assert!(!prices.is_empty(), "closing-price series must be non-empty");

    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);

    PriceSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        avg: sorted.iter().sum::<f64>() / sorted.len() as f64,
        median: median_of_sorted(&sorted),
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
