//! Per-record validation and display formatting.
//!
//! Each field is validated independently; the first failure wins, in the
//! declaration order of the display row (index, buy bond, buy price, sell
//! bond, sell price, price diff, yield diff, signal, confidence). The match
//! markers can never fail.

use hyg_model::{
    ConfidenceCell, DisplaySignal, DURATION_MARKER, RawSignal, Result, SECTOR_MARKER, SignClass,
    SignalBadge, SignalField, SignalStrength, SignedMetric, ValidationError,
};

/// Transform one untrusted record into a display-ready row, or fail with the
/// first offending field.
pub fn transform_signal(raw: &RawSignal) -> Result<DisplaySignal> {
    Ok(DisplaySignal {
        index: map_index(raw.priority)?,
        buy_bond: map_description(&raw.buy_description, SignalField::BuyDescription)?,
        buy_price: map_price(raw.buy_price, SignalField::BuyPrice)?,
        sell_bond: map_description(&raw.sell_description, SignalField::SellDescription)?,
        sell_price: map_price(raw.sell_price, SignalField::SellPrice)?,
        price_diff: map_diff(raw.price_diff, SignalField::PriceDiff, false)?,
        yield_diff: map_diff(raw.yield_diff, SignalField::YieldDiff, true)?,
        signal: map_signal_strength(&raw.signal_strength)?,
        confidence: map_confidence(raw.confidence)?,
        matches: map_matches(raw.duration_match, raw.sector_match),
    })
}

fn map_index(priority: f64) -> Result<String> {
    if !priority.is_finite() || priority.fract() != 0.0 || priority < 1.0 {
        return Err(ValidationError::new(
            SignalField::Priority,
            priority,
            "must be a positive integer",
        ));
    }
    Ok(format!("{}", priority as i64))
}

fn map_description(description: &str, field: SignalField) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            field,
            description,
            "bond description cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

fn map_price(price: f64, field: SignalField) -> Result<String> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new(
            field,
            price,
            "must be a non-negative finite number",
        ));
    }
    Ok(format!("{price:.2}"))
}

fn map_diff(diff: f64, field: SignalField, percent: bool) -> Result<SignedMetric> {
    if !diff.is_finite() {
        return Err(ValidationError::new(field, diff, "must be a finite number"));
    }
    let value = if percent {
        format!("{:.2}%", diff.abs())
    } else {
        format!("{:.2}", diff.abs())
    };
    Ok(SignedMetric {
        value,
        sign: SignClass::of(diff),
    })
}

fn map_signal_strength(label: &str) -> Result<SignalBadge> {
    let strength: SignalStrength = label
        .parse()
        .map_err(|message| ValidationError::new(SignalField::SignalStrength, label, message))?;
    Ok(SignalBadge {
        value: strength,
        style: strength.style(),
    })
}

fn map_confidence(confidence: f64) -> Result<ConfidenceCell> {
    if !confidence.is_finite() {
        return Err(ValidationError::new(
            SignalField::Confidence,
            confidence,
            "must be a finite number",
        ));
    }
    let clamped = confidence.clamp(0.0, 100.0);
    Ok(ConfidenceCell {
        percentage: clamped,
        display: format!("{}%", clamped.round() as i64),
    })
}

fn map_matches(duration_match: bool, sector_match: bool) -> String {
    let mut markers = Vec::with_capacity(2);
    if duration_match {
        markers.push(DURATION_MARKER);
    }
    if sector_match {
        markers.push(SECTOR_MARKER);
    }
    markers.join(" ")
}
