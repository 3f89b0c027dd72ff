//! Sequencing per-ticker work and writing the output artifact.
//!
//! The runner walks the requested tickers strictly in input order, collects
//! one report per ticker regardless of individual failures, and serializes
//! the whole batch in a single write at the end of the run.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use stock_common::report::TickerReport;
use stock_common::tickers::Ticker;
use stock_common::Result;

use crate::fetcher::{Fetcher, HistoricalSource, Sleeper};

/// Fetches every ticker in input order and collects all outcomes.
///
/// A ticker whose retry budget is exhausted contributes a failure entry; it
/// never aborts the remaining tickers.
pub fn run<S: HistoricalSource, P: Sleeper>(
    fetcher: &Fetcher<S, P>,
    tickers: &[Ticker],
) -> Vec<TickerReport> {
    tickers.iter().map(|ticker| fetcher.fetch(ticker)).collect()
}

/// Serializes the batch to `path` as a JSON array indented with four
/// spaces, overwriting any previous artifact at that location.
pub fn write_report(path: &Path, reports: &[TickerReport]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    reports.serialize(&mut serializer)?;
    writer.flush()?;
    info!("Data successfully written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::Fetcher;
    use crate::test_support::{rows_body, today, RecordingSleeper, ScriptedSource};
    use serde_json::json;

    #[test]
    fn one_report_per_ticker_in_input_order() {
        // AAPL succeeds on its first attempt; BADTICKER burns all three
        // attempts on a body without the quote-rows table.
        let source = ScriptedSource::new(vec![
            Ok(rows_body(&["$1.00", "$2.00", "$3.00"])),
            Ok(json!({"data": {}})),
            Ok(json!({"data": {}})),
            Ok(json!({"data": {}})),
        ]);
        let fetcher = Fetcher::new(source, RecordingSleeper::default(), today());
        let tickers = vec![
            Ticker::new("AAPL").unwrap(),
            Ticker::new("BADTICKER").unwrap(),
        ];

        let reports = run(&fetcher, &tickers);

        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_summary());
        assert!(!reports[1].is_summary());
        assert_eq!(reports[0].ticker().as_str(), "AAPL");
        assert_eq!(reports[1].ticker().as_str(), "BADTICKER");
    }

    #[test]
    fn failure_does_not_abort_later_tickers() {
        let source = ScriptedSource::new(vec![
            Err("down".to_string()),
            Err("down".to_string()),
            Err("down".to_string()),
            Ok(rows_body(&["$5.00"])),
        ]);
        let fetcher = Fetcher::new(source.clone(), RecordingSleeper::default(), today());
        let tickers = vec![Ticker::new("AAPL").unwrap(), Ticker::new("MSFT").unwrap()];

        let reports = run(&fetcher, &tickers);

        assert!(!reports[0].is_summary());
        assert!(reports[1].is_summary());
        assert_eq!(source.calls(), vec!["AAPL", "AAPL", "AAPL", "MSFT"]);
    }

    #[test]
    fn artifact_is_a_four_space_indented_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.json");
        let source = ScriptedSource::new(vec![Ok(rows_body(&["$1.00", "$3.00"]))]);
        let fetcher = Fetcher::new(source, RecordingSleeper::default(), today());
        let reports = run(&fetcher, &[Ticker::new("aapl").unwrap()]);

        write_report(&path, &reports).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n    {\n        "));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "ticker": "AAPL",
                "min": 1.0,
                "max": 3.0,
                "avg": 2.0,
                "median": 2.0
            }])
        );
    }

    #[test]
    fn write_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.json");
        std::fs::write(&path, "stale contents that are much longer than the new ones").unwrap();

        write_report(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("stocks.json");
        assert!(write_report(&path, &[]).is_err());
    }
}
