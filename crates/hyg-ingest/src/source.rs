//! Signal providers.
//!
//! The pipeline never reaches for ambient state: whoever drives it hands in
//! a [`SignalSource`], and the built-in sample records are just one more
//! provider behind the same seam.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use hyg_model::RawSignal;

use crate::csv_source::CsvFileSource;

/// A provider of raw signal records.
pub trait SignalSource: std::fmt::Debug {
    /// Human-readable description of where the records come from.
    fn describe(&self) -> String;

    /// Load the full sequence of raw records.
    fn load(&self) -> Result<Vec<RawSignal>>;
}

/// Reads a JSON array of raw signal records.
///
/// Accepts both the table contract field names and the CSV contract aliases
/// (`execution_priority`, `price_differential`, ...).
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignalSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawSignal>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read signals file {}", self.path.display()))?;
        let raws: Vec<RawSignal> = serde_json::from_str(&text)
            .with_context(|| format!("parse signals JSON {}", self.path.display()))?;
        debug!(records = raws.len(), path = %self.path.display(), "loaded JSON signals");
        Ok(raws)
    }
}

/// Built-in demonstration records, used when no input file is given.
#[derive(Debug)]
pub struct SampleSource;

impl SignalSource for SampleSource {
    fn describe(&self) -> String {
        "built-in sample signals".to_string()
    }

    fn load(&self) -> Result<Vec<RawSignal>> {
        Ok(vec![
            RawSignal {
                priority: 1.0,
                buy_description: "ARDAGH 5.250% 08/2027 [144A]".to_string(),
                buy_price: 41.57,
                sell_description: "CLARIOS 8.500% 05/2027 [144A]".to_string(),
                sell_price: 100.17,
                price_diff: 58.60,
                yield_diff: 47.75,
                signal_strength: "STRONG".to_string(),
                confidence: 100.0,
                duration_match: true,
                sector_match: true,
            },
            RawSignal {
                priority: 2.0,
                buy_description: "TESLA INC 1.250% 03/2033".to_string(),
                buy_price: 78.92,
                sell_description: "FORD MOTOR 4.750% 01/2043".to_string(),
                sell_price: 95.44,
                price_diff: 16.52,
                yield_diff: -12.33,
                signal_strength: "MODERATE".to_string(),
                confidence: 75.0,
                duration_match: false,
                sector_match: true,
            },
        ])
    }
}

/// Pick a file source by extension (`.json` or `.csv`, case-insensitive).
pub fn source_for_path(path: &Path) -> Result<Box<dyn SignalSource>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("json") {
        Ok(Box::new(JsonFileSource::new(path)))
    } else if extension.eq_ignore_ascii_case("csv") {
        Ok(Box::new(CsvFileSource::new(path)))
    } else {
        bail!(
            "unsupported input format for {} (expected .json or .csv)",
            path.display()
        );
    }
}
