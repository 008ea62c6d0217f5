//! Property tests for the transform.

use proptest::prelude::*;

use hyg_model::RawSignal;
use hyg_transform::transform_signal;

fn strength_label() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "WEAK".to_string(),
        "weak".to_string(),
        "Moderate".to_string(),
        "MODERATE".to_string(),
        "MEDIUM".to_string(),
        "STRONG".to_string(),
        "strong".to_string(),
    ])
}

proptest! {
    #[test]
    fn valid_records_always_transform(
        priority in 1i64..100_000,
        buy in "[A-Z][A-Z0-9 .%]{0,30}",
        sell in "[A-Z][A-Z0-9 .%]{0,30}",
        buy_price in 0.0..10_000.0f64,
        sell_price in 0.0..10_000.0f64,
        price_diff in -500.0..500.0f64,
        yield_diff in -500.0..500.0f64,
        strength in strength_label(),
        confidence in -1_000.0..1_000.0f64,
        duration_match: bool,
        sector_match: bool,
    ) {
        let raw = RawSignal {
            priority: priority as f64,
            buy_description: buy,
            buy_price,
            sell_description: sell,
            sell_price,
            price_diff,
            yield_diff,
            signal_strength: strength,
            confidence,
            duration_match,
            sector_match,
        };
        let row = transform_signal(&raw).expect("valid record must transform");

        let expected_index = priority.to_string();
        prop_assert_eq!(row.index.as_str(), expected_index.as_str());

        // Prices render with exactly two decimals.
        let (_, decimals) = row.buy_price.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 2);

        // Diffs render their absolute value; sign survives as classification.
        prop_assert!(!row.price_diff.value.starts_with('-'));
        prop_assert!(row.yield_diff.value.ends_with('%'));

        // Confidence is clamped into [0, 100] whatever the input was.
        prop_assert!((0.0..=100.0).contains(&row.confidence.percentage));
        let display: f64 = row
            .confidence
            .display
            .trim_end_matches('%')
            .parse()
            .expect("numeric confidence display");
        prop_assert!((0.0..=100.0).contains(&display));
    }

    #[test]
    fn confidence_clamp_is_idempotent(confidence in -1_000.0..1_000.0f64) {
        let mut raw = RawSignal {
            priority: 1.0,
            buy_description: "A".to_string(),
            buy_price: 1.0,
            sell_description: "B".to_string(),
            sell_price: 1.0,
            price_diff: 0.0,
            yield_diff: 0.0,
            signal_strength: "WEAK".to_string(),
            confidence,
            duration_match: false,
            sector_match: false,
        };
        let first = transform_signal(&raw).unwrap();
        raw.confidence = first.confidence.percentage;
        let second = transform_signal(&raw).unwrap();
        prop_assert_eq!(first.confidence, second.confidence);
    }
}
