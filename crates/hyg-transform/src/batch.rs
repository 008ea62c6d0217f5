//! Batch transform with per-record error isolation.

use tracing::warn;

use hyg_model::{DisplaySignal, RawSignal, ValidationError};

use crate::transform::transform_signal;

/// A record that failed validation, with its position in the input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub position: usize,
    pub error: ValidationError,
}

/// Surviving rows plus the failures that were dropped along the way.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Transformed rows, in input order.
    pub signals: Vec<DisplaySignal>,
    /// Dropped records, in input order.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// True when no record survived, including the empty-input case. The
    /// renderer shows its no-data state rather than treating this as fatal.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.failures.len()
    }
}

/// Transform each record independently; a failure is logged and recorded but
/// never aborts processing of the records after it.
pub fn transform_batch(raws: &[RawSignal]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (position, raw) in raws.iter().enumerate() {
        match transform_signal(raw) {
            Ok(signal) => outcome.signals.push(signal),
            Err(error) => {
                warn!(position, %error, "dropping signal record");
                outcome.failures.push(BatchFailure { position, error });
            }
        }
    }
    outcome
}
