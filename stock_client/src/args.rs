//! Command-line arguments for the stock statistics client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbols to fetch, e.g. `AAPL MSFT`. At least one is required.
    pub tickers: Vec<String>,

    /// Path of the JSON artifact the results are written to.
    #[clap(long, default_value = "stocks.json")]
    pub output: PathBuf,
}
