//! Type-safe enumerations for the signal display pipeline.
//!
//! These enums replace the stringly-typed field names, style-class lookups
//! and sort parameters of the original page contract with closed sets that
//! are resolved at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which field of a raw signal record failed validation.
///
/// Names match the source record contract, so a logged failure can be traced
/// straight back to the offending column of the upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalField {
    Priority,
    BuyDescription,
    BuyPrice,
    SellDescription,
    SellPrice,
    PriceDiff,
    YieldDiff,
    SignalStrength,
    Confidence,
}

impl SignalField {
    /// Returns the canonical field name as it appears in the data contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalField::Priority => "priority",
            SignalField::BuyDescription => "buy_description",
            SignalField::BuyPrice => "buy_price",
            SignalField::SellDescription => "sell_description",
            SignalField::SellPrice => "sell_price",
            SignalField::PriceDiff => "price_diff",
            SignalField::YieldDiff => "yield_diff",
            SignalField::SignalStrength => "signal_strength",
            SignalField::Confidence => "confidence",
        }
    }
}

impl fmt::Display for SignalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signal strength classification for a bond-pair arbitrage candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStrength {
    Weak,
    Moderate,
    Strong,
}

impl SignalStrength {
    /// Returns the normalized uppercase form used for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Weak => "WEAK",
            SignalStrength::Moderate => "MODERATE",
            SignalStrength::Strong => "STRONG",
        }
    }

    /// Returns the visual treatment for this strength.
    pub fn style(&self) -> SignalStyle {
        match self {
            SignalStrength::Strong => SignalStyle::Strong,
            SignalStrength::Moderate => SignalStyle::Moderate,
            SignalStrength::Weak => SignalStyle::Weak,
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SignalStrength {
    type Err = String;

    /// Parse a signal strength label (case-insensitive).
    ///
    /// Accepts the legacy alias `MEDIUM` for `MODERATE` uniformly, so the
    /// validator and the style lookup can never disagree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WEAK" => Ok(SignalStrength::Weak),
            "MODERATE" | "MEDIUM" => Ok(SignalStrength::Moderate),
            "STRONG" => Ok(SignalStrength::Strong),
            _ => Err(format!("must be one of: WEAK, MODERATE, STRONG (got {s})")),
        }
    }
}

/// Style classification consumed by renderers for signal badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalStyle {
    #[serde(rename = "signal-strong")]
    Strong,
    #[serde(rename = "signal-moderate")]
    Moderate,
    #[serde(rename = "signal-weak")]
    Weak,
}

impl SignalStyle {
    /// Returns the style class identifier.
    pub fn class_name(&self) -> &'static str {
        match self {
            SignalStyle::Strong => "signal-strong",
            SignalStyle::Moderate => "signal-moderate",
            SignalStyle::Weak => "signal-weak",
        }
    }
}

impl fmt::Display for SignalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// Sign classification of a numeric value, driving display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Positive,
    Negative,
}

impl SignClass {
    /// Classify a value by sign. Zero (either sign) classifies positive.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            SignClass::Positive
        } else {
            SignClass::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignClass::Positive => "positive",
            SignClass::Negative => "negative",
        }
    }
}

impl fmt::Display for SignClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column a signal table can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Priority,
    Confidence,
    PriceDiff,
    YieldDiff,
}

impl SortKey {
    /// Resolve a sort parameter. Total: unrecognized input falls back to
    /// priority ordering, matching the table contract.
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_lowercase().as_str() {
            "confidence" => SortKey::Confidence,
            "price_diff" => SortKey::PriceDiff,
            "yield_diff" => SortKey::YieldDiff,
            _ => SortKey::Priority,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Priority => "priority",
            SortKey::Confidence => "confidence",
            SortKey::PriceDiff => "price_diff",
            SortKey::YieldDiff => "yield_diff",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction. Defaults to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Resolve a direction parameter. Anything other than `DESC`
    /// (case-insensitive) orders ascending.
    pub fn from_param(param: &str) -> Self {
        if param.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
