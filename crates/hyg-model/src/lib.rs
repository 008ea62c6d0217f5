pub mod display;
pub mod enums;
pub mod error;
pub mod raw;

pub use display::{
    ConfidenceCell, DisplaySignal, DURATION_MARKER, SECTOR_MARKER, SignalBadge, SignedMetric,
};
pub use enums::{SignClass, SignalField, SignalStrength, SignalStyle, SortDirection, SortKey};
pub use error::{Result, ValidationError};
pub use raw::RawSignal;
