//! Shared fakes for exercising the fetch/retry pipeline without a network.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};
use stock_common::tickers::Ticker;
use stock_common::QuoteError;
use stock_common::Result;

use crate::fetcher::{HistoricalSource, Sleeper};

/// Fixed "today" used by tests so window arithmetic is reproducible.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

/// Builds a response body with one quote row per closing-price string.
pub fn rows_body(closes: &[&str]) -> Value {
    let rows: Vec<Value> = closes.iter().map(|close| json!({"close": close})).collect();
    json!({"data": {"tradesTable": {"rows": rows}}})
}

/// Source that replays a script of responses, one per call, and records
/// which tickers were requested. Scripted errors are surfaced as
/// validation-style `Format` errors.
#[derive(Clone)]
pub struct ScriptedSource {
    responses: Rc<RefCell<VecDeque<Result<Value, String>>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSource {
    /// Creates a source that will serve `responses` in order.
    pub fn new(responses: Vec<Result<Value, String>>) -> Self {
        Self {
            responses: Rc::new(RefCell::new(responses.into())),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Tickers requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl HistoricalSource for ScriptedSource {
    fn historical(&self, ticker: &Ticker, _from: NaiveDate) -> Result<Value> {
        self.calls.borrow_mut().push(ticker.to_string());
        let scripted = self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("scripted source ran out of responses");
        scripted.map_err(QuoteError::Format)
    }
}

/// Sleeper that records requested pauses instead of blocking.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    naps: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Pauses requested so far, in order.
    pub fn naps(&self) -> Vec<Duration> {
        self.naps.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.naps.borrow_mut().push(duration);
    }
}
