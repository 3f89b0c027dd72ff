//! Fetching historical closing prices from the NASDAQ public API.
//!
//! This module provides the transport seam (`HistoricalSource`) with its
//! production implementation `NasdaqSource`, the injectable `Sleeper` pause
//! capability, and the `Fetcher` retry loop that turns a ticker symbol into
//! a `TickerReport`. One request covers the trailing 5-year window ending
//! today. Transport failures and validation failures share the same retry
//! path; once the attempt budget is exhausted the last error is downgraded
//! to a per-ticker failure entry so the rest of the batch keeps going.
use std::thread;
use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use serde_json::Value;
use stock_common::report::TickerReport;
use stock_common::summary::summarize;
use stock_common::tickers::Ticker;
use stock_common::QuoteError;
use stock_common::Result;

/// Base URL of the NASDAQ public API.
pub const BASE_URL: &str = "https://api.nasdaq.com";

/// Browser-like User-Agent. The endpoint rejects requests without one.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Hard timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Total attempts per ticker, the first try included.
const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause between attempts; no backoff growth.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Length of the trailing history window in years.
const HISTORY_YEARS: i32 = 5;

/// Row limit large enough to cover the whole window of daily rows.
const ROW_LIMIT: u32 = 9999;

/// Transport capability producing the raw historical-quotes response body.
///
/// Implemented by `NasdaqSource` in production and by scripted fakes in
/// tests, so the retry loop can be exercised without a network.
pub trait HistoricalSource {
    /// Fetches the historical-quotes JSON body for `ticker`, covering the
    /// daily rows from `from` up to today.
    fn historical(&self, ticker: &Ticker, from: NaiveDate) -> Result<Value>;
}

/// Production source backed by a blocking HTTP client.
///
/// The client is built once with the fixed request timeout and the
/// browser-like identification header, and reused for every request.
pub struct NasdaqSource {
    client: reqwest::blocking::Client,
}

impl NasdaqSource {
    /// Creates the source and its underlying HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Builds the historical-quotes endpoint URL for a ticker and window start.
    fn historical_url(ticker: &Ticker, from: NaiveDate) -> String {
        format!(
            "{BASE_URL}/api/quote/{ticker}/historical?assetclass=stocks&fromdate={from}&limit={ROW_LIMIT}"
        )
    }
}

impl HistoricalSource for NasdaqSource {
    fn historical(&self, ticker: &Ticker, from: NaiveDate) -> Result<Value> {
        let url = Self::historical_url(ticker, from);
        let started = Instant::now();
        let response = self.client.get(&url).send()?;
        info!(
            "Request time for {}: {:.2} seconds",
            ticker,
            started.elapsed().as_secs_f64()
        );
        let body = response.error_for_status()?.json::<Value>()?;
        Ok(body)
    }
}

/// Pause capability used between retry attempts.
///
/// Injectable so tests can drive the retry loop without real delays and
/// assert on the requested pauses.
pub trait Sleeper {
    /// Blocks the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Fetches and summarizes one ticker at a time with bounded retries.
pub struct Fetcher<S, P> {
    source: S,
    sleeper: P,
    today: NaiveDate,
}

impl<S: HistoricalSource, P: Sleeper> Fetcher<S, P> {
    /// Creates a fetcher. `today` is injected rather than read from the
    /// clock so the trailing-window computation stays deterministic under
    /// test.
    pub fn new(source: S, sleeper: P, today: NaiveDate) -> Self {
        Self {
            source,
            sleeper,
            today,
        }
    }

    /// Fetches `ticker` and reduces its closing prices to summary
    /// statistics.
    ///
    /// Transport and validation errors alike are retried up to the attempt
    /// budget with a fixed pause in between. After the final failed attempt
    /// the last error's description is carried in the failure report;
    /// nothing is raised past this boundary.
    pub fn fetch(&self, ticker: &Ticker) -> TickerReport {
        let from = self.window_start();

        let mut attempt = 1;
        loop {
            match self.try_fetch(ticker, from) {
                Ok(prices) => {
                    return TickerReport::summary(ticker.clone(), summarize(&prices));
                }
                Err(e) => {
                    warn!("Attempt {} failed for {}: {}", attempt, ticker, e);
                    if attempt == MAX_ATTEMPTS {
                        return TickerReport::failure(ticker.clone(), e.to_string());
                    }
                    attempt += 1;
                    self.sleeper.sleep(RETRY_DELAY);
                }
            }
        }
    }

    /// Start of the trailing window: `today` minus five calendar years.
    /// Feb 29 maps to Feb 28 when the target year has no leap day.
    fn window_start(&self) -> NaiveDate {
        let year = self.today.year() - HISTORY_YEARS;
        self.today.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }

    /// Single attempt: fetch the body, validate its shape, and extract the
    /// closing-price series.
    fn try_fetch(&self, ticker: &Ticker, from: NaiveDate) -> Result<Vec<f64>> {
        let body = self.source.historical(ticker, from)?;

        let rows = body
            .get("data")
            .and_then(|data| data.get("tradesTable"))
            .and_then(|table| table.get("rows"))
            .and_then(Value::as_array)
            .ok_or_else(|| QuoteError::MalformedResponse(ticker.to_string()))?;

        let prices = extract_closing_prices(rows)?;
        if prices.is_empty() {
            return Err(QuoteError::NoClosingPrices(ticker.to_string()));
        }
        Ok(prices)
    }
}

/// Collects the usable closing prices from the quote rows.
///
/// Rows without a `close` field, or with an empty one, are skipped rather
/// than treated as errors; a present close that cannot be parsed is a
/// validation failure.
fn extract_closing_prices(rows: &[Value]) -> Result<Vec<f64>> {
    rows.iter()
        .filter_map(|row| row.get("close").and_then(Value::as_str))
        .filter(|close| !close.is_empty())
        .map(parse_close)
        .collect()
}

/// Parses a currency-formatted closing price such as `"$1,234.56"`.
///
/// Accepted format: an optional `$` currency symbol and `,` thousands
/// separators around a decimal number. Both are stripped before parsing.
fn parse_close(raw: &str) -> Result<f64> {
    let cleaned = raw.replace('$', "").replace(',', "");
    cleaned
        .parse()
        .map_err(|_| QuoteError::Format(format!("invalid closing price {raw:?}")))
}
