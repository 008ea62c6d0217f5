//! Deterministic ordering of transformed rows.

use std::cmp::Ordering;

use hyg_model::{DisplaySignal, SortDirection, SortKey};

/// Order transformed rows by the given key and direction into a new vector.
///
/// The input is never mutated. The sort is stable, so rows comparing equal
/// keep their relative input order.
pub fn sort_signals(
    signals: &[DisplaySignal],
    key: SortKey,
    direction: SortDirection,
) -> Vec<DisplaySignal> {
    let mut ordered = signals.to_vec();
    ordered.sort_by(|a, b| compare_signals(a, b, key, direction));
    ordered
}

/// Extract the comparable value for one row. The parses cannot fail for rows
/// produced by the transform; a foreign row orders last via NaN.
fn sort_value(signal: &DisplaySignal, key: SortKey) -> f64 {
    match key {
        SortKey::Priority => signal.index.parse().unwrap_or(f64::NAN),
        SortKey::Confidence => signal.confidence.percentage,
        SortKey::PriceDiff => signal.price_diff.value.parse().unwrap_or(f64::NAN),
        SortKey::YieldDiff => signal
            .yield_diff
            .value
            .trim_end_matches('%')
            .parse()
            .unwrap_or(f64::NAN),
    }
}

/// Convenience comparator for callers that sort row references in place.
pub fn compare_signals(
    a: &DisplaySignal,
    b: &DisplaySignal,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = sort_value(a, key).total_cmp(&sort_value(b, key));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
