//! KatanaSignalEngine enhanced-CSV loading.
//!
//! The engine writes `hyg_signals_enhanced_*.csv` files with the wide header
//! names (`execution_priority`, `price_differential`, `yield_differential`,
//! `confidence_score`); the short table-contract names are accepted too.
//! Cells are mapped leniently: a missing column or blank cell takes the
//! contract default, while a malformed numeric cell becomes NaN so that the
//! transform drops that one row instead of ingest aborting the whole file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use hyg_model::RawSignal;

use crate::source::SignalSource;

/// Reads raw signals from a KatanaSignalEngine CSV file.
#[derive(Debug)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignalSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawSignal>> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("open signals CSV {}", self.path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("read CSV headers {}", self.path.display()))?
            .clone();
        let columns = Columns::locate(&headers);

        let mut raws = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("read CSV row {} of {}", row + 1, self.path.display()))?;
            raws.push(columns.to_signal(&record, row + 1));
        }
        debug!(records = raws.len(), path = %self.path.display(), "loaded CSV signals");
        Ok(raws)
    }
}

/// Header positions for the signal columns, resolved once per file.
struct Columns {
    priority: Option<usize>,
    buy_description: Option<usize>,
    buy_price: Option<usize>,
    sell_description: Option<usize>,
    sell_price: Option<usize>,
    price_diff: Option<usize>,
    yield_diff: Option<usize>,
    signal_strength: Option<usize>,
    confidence: Option<usize>,
    duration_match: Option<usize>,
    sector_match: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        Self {
            priority: find_column(headers, &["priority", "execution_priority"]),
            buy_description: find_column(headers, &["buy_description"]),
            buy_price: find_column(headers, &["buy_price"]),
            sell_description: find_column(headers, &["sell_description"]),
            sell_price: find_column(headers, &["sell_price"]),
            price_diff: find_column(headers, &["price_diff", "price_differential"]),
            yield_diff: find_column(headers, &["yield_diff", "yield_differential"]),
            signal_strength: find_column(headers, &["signal_strength"]),
            confidence: find_column(headers, &["confidence", "confidence_score"]),
            duration_match: find_column(headers, &["duration_match"]),
            sector_match: find_column(headers, &["sector_match"]),
        }
    }

    fn to_signal(&self, record: &StringRecord, row: usize) -> RawSignal {
        RawSignal {
            // Blank priority takes the 1-based row number, per the engine's
            // converter contract.
            priority: parse_number(cell(record, self.priority), row as f64),
            buy_description: cell(record, self.buy_description)
                .unwrap_or_default()
                .trim()
                .to_string(),
            buy_price: parse_number(cell(record, self.buy_price), 0.0),
            sell_description: cell(record, self.sell_description)
                .unwrap_or_default()
                .trim()
                .to_string(),
            sell_price: parse_number(cell(record, self.sell_price), 0.0),
            price_diff: parse_number(cell(record, self.price_diff), 0.0),
            yield_diff: parse_number(cell(record, self.yield_diff), 0.0),
            signal_strength: match cell(record, self.signal_strength) {
                Some(text) if !text.trim().is_empty() => text.trim().to_string(),
                _ => "MODERATE".to_string(),
            },
            confidence: parse_number(cell(record, self.confidence), 50.0),
            duration_match: parse_bool(cell(record, self.duration_match)),
            sector_match: parse_bool(cell(record, self.sector_match)),
        }
    }
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.iter().any(|name| normalize_header(header) == *name))
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_lowercase()
}

fn cell<'a>(record: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| record.get(i))
}

/// Blank or absent cells take the default; garbage becomes NaN and is left
/// for the transform to reject row by row.
fn parse_number(cell: Option<&str>, default: f64) -> f64 {
    match cell.map(str::trim) {
        None | Some("") => default,
        Some(text) => text.parse().unwrap_or(f64::NAN),
    }
}

fn parse_bool(cell: Option<&str>) -> bool {
    matches!(
        cell.map(|c| c.trim().to_lowercase()).as_deref(),
        Some("true" | "1" | "yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_boolean_parsing() {
        assert!(parse_bool(Some("True")));
        assert!(parse_bool(Some("YES")));
        assert!(parse_bool(Some("1")));
        assert!(!parse_bool(Some("False")));
        assert!(!parse_bool(Some("0")));
        assert!(!parse_bool(Some("")));
        assert!(!parse_bool(None));
    }

    #[test]
    fn blank_numbers_take_defaults_and_garbage_becomes_nan() {
        assert_eq!(parse_number(Some(""), 50.0), 50.0);
        assert_eq!(parse_number(None, 7.0), 7.0);
        assert_eq!(parse_number(Some("41.57"), 0.0), 41.57);
        assert!(parse_number(Some("n/a"), 0.0).is_nan());
    }
}
