//! Untrusted input records.

use serde::{Deserialize, Serialize};

/// One unvalidated bond-pair trading signal, exactly as supplied by the
/// upstream engine.
///
/// Field aliases follow the KatanaSignalEngine CSV contract, so JSON produced
/// from either the enhanced CSV headers (`execution_priority`,
/// `price_differential`, ...) or the table contract names deserializes the
/// same way. `priority` is numeric rather than integral so that a fractional
/// upstream value can be carried into validation and rejected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSignal {
    #[serde(alias = "execution_priority")]
    pub priority: f64,
    pub buy_description: String,
    pub buy_price: f64,
    pub sell_description: String,
    pub sell_price: f64,
    #[serde(alias = "price_differential")]
    pub price_diff: f64,
    #[serde(alias = "yield_differential")]
    pub yield_diff: f64,
    pub signal_strength: String,
    #[serde(alias = "confidence_score")]
    pub confidence: f64,
    /// Missing match flags are treated as false, never as an error.
    #[serde(default)]
    pub duration_match: bool,
    #[serde(default)]
    pub sector_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_table_contract_names() {
        let json = r#"{
            "priority": 1,
            "buy_description": "ARDAGH 5.250% 08/2027 [144A]",
            "buy_price": 41.57,
            "sell_description": "CLARIOS 8.500% 05/2027 [144A]",
            "sell_price": 100.17,
            "price_diff": 58.60,
            "yield_diff": 47.75,
            "signal_strength": "STRONG",
            "confidence": 100,
            "duration_match": true,
            "sector_match": true
        }"#;
        let raw: RawSignal = serde_json::from_str(json).unwrap();
        assert_eq!(raw.priority, 1.0);
        assert_eq!(raw.buy_price, 41.57);
        assert!(raw.duration_match);
    }

    #[test]
    fn deserializes_csv_contract_aliases() {
        let json = r#"{
            "execution_priority": 2,
            "buy_description": "TESLA INC 1.250% 03/2033",
            "buy_price": 78.92,
            "sell_description": "FORD MOTOR 4.750% 01/2043",
            "sell_price": 95.44,
            "price_differential": 16.52,
            "yield_differential": -12.33,
            "signal_strength": "MODERATE",
            "confidence_score": 75
        }"#;
        let raw: RawSignal = serde_json::from_str(json).unwrap();
        assert_eq!(raw.priority, 2.0);
        assert_eq!(raw.price_diff, 16.52);
        assert_eq!(raw.yield_diff, -12.33);
        assert_eq!(raw.confidence, 75.0);
        // Missing match flags default to false.
        assert!(!raw.duration_match);
        assert!(!raw.sector_match);
    }
}
