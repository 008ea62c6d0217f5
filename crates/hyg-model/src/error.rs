use std::fmt;

use thiserror::Error;

use crate::enums::SignalField;

/// Validation failure for exactly one field of one raw signal record.
///
/// Carries the offending field as a closed enum together with the rejected
/// value rendered as text, so callers can log or report the failure without
/// holding on to the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message} (value: {value})")]
pub struct ValidationError {
    pub field: SignalField,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: SignalField, value: impl fmt::Display, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
