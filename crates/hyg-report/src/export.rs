//! Normalized JSON export.
//!
//! Writes the validated, formatted rows as a pretty-printed JSON array using
//! the camelCase table-contract field names, the counterpart of the signal
//! engine's JSON hand-off file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use hyg_model::DisplaySignal;

pub fn write_json(signals: &[DisplaySignal], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(signals).context("serialize display signals")?;
    fs::write(path, json).with_context(|| format!("write signals JSON {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyg_model::{
        ConfidenceCell, SignClass, SignalBadge, SignalStrength, SignalStyle, SignedMetric,
    };

    #[test]
    fn written_file_round_trips_as_contract_json() {
        let signal = DisplaySignal {
            index: "2".to_string(),
            buy_bond: "TESLA INC 1.250% 03/2033".to_string(),
            buy_price: "78.92".to_string(),
            sell_bond: "FORD MOTOR 4.750% 01/2043".to_string(),
            sell_price: "95.44".to_string(),
            price_diff: SignedMetric {
                value: "16.52".to_string(),
                sign: SignClass::Positive,
            },
            yield_diff: SignedMetric {
                value: "12.33%".to_string(),
                sign: SignClass::Negative,
            },
            signal: SignalBadge {
                value: SignalStrength::Moderate,
                style: SignalStyle::Moderate,
            },
            confidence: ConfidenceCell {
                percentage: 75.0,
                display: "75%".to_string(),
            },
            matches: "🏢".to_string(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signals.json");
        write_json(std::slice::from_ref(&signal), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["sellBond"], "FORD MOTOR 4.750% 01/2043");
        assert_eq!(value[0]["yieldDiff"]["cssClass"], "negative");
        assert_eq!(value[0]["signal"]["cssClass"], "signal-moderate");
        assert_eq!(value[0]["confidence"]["percentage"], 75.0);
    }
}
