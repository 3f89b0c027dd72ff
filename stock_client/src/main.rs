//! Stock statistics client. Fetches historical daily closing prices for the
//! requested ticker symbols from the NASDAQ public API, reduces each series
//! to summary statistics (min, max, mean, median) over the trailing 5-year
//! window, and writes all results to a single JSON artifact.
//!
//! Usage example (CLI):
//! ```bash
//! stock_client AAPL msft TSLA --output stocks.json
//! ```
//!
//! Tickers are processed strictly one after another. Each ticker gets up to
//! three attempts with a fixed pause in between; a ticker whose attempts are
//! all exhausted is recorded as a failure entry in the artifact without
//! aborting the rest of the batch. Only a usage error (no tickers) or a
//! failure to write the artifact terminates the run with a non-zero status.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod runner;
#[cfg(test)]
mod test_support;

use std::process;

use chrono::Utc;
use clap::Parser;
use log::error;
use stock_common::tickers::Ticker;
use stock_common::QuoteError;
use stock_common::Result;

use crate::args::Args;
use crate::fetcher::{Fetcher, NasdaqSource, ThreadSleeper};

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    if args.tickers.is_empty() {
        eprintln!("Usage: stock_client <TICKER1> <TICKER2> ...");
        process::exit(1);
    }

    let tickers = args
        .tickers
        .iter()
        .map(|raw| Ticker::new(raw))
        .collect::<Result<Vec<_>>>()?;

    let source = NasdaqSource::new()?;
    let fetcher = Fetcher::new(source, ThreadSleeper, Utc::now().date_naive());

    let reports = runner::run(&fetcher, &tickers);

    if let Err(e) = runner::write_report(&args.output, &reports) {
        error!("Error writing to file: {}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
