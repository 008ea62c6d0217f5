//! Validated, display-ready records.

use serde::Serialize;

use crate::enums::{SignClass, SignalStrength, SignalStyle};

/// Marker glyph shown when the pair's durations match.
pub const DURATION_MARKER: &str = "⏱";
/// Marker glyph shown when the pair's sectors match.
pub const SECTOR_MARKER: &str = "🏢";

/// A formatted absolute value plus the sign classification of the original.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedMetric {
    pub value: String,
    #[serde(rename = "cssClass")]
    pub sign: SignClass,
}

/// Normalized signal strength plus its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalBadge {
    pub value: SignalStrength,
    #[serde(rename = "cssClass")]
    pub style: SignalStyle,
}

/// Clamped confidence percentage plus its display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceCell {
    pub percentage: f64,
    pub display: String,
}

/// One validated, formatted signal row, ready for rendering.
///
/// Constructed fresh per transform call and owned by the caller; the JSON
/// serialization uses the camelCase names of the original table contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySignal {
    /// Text form of the record's execution priority; keys row callbacks.
    pub index: String,
    pub buy_bond: String,
    pub buy_price: String,
    pub sell_bond: String,
    pub sell_price: String,
    pub price_diff: SignedMetric,
    pub yield_diff: SignedMetric,
    pub signal: SignalBadge,
    pub confidence: ConfidenceCell,
    /// Up to two match marker glyphs, space-joined.
    pub matches: String,
}
