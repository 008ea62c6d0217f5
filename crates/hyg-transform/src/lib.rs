//! Validation-and-transform pipeline for HYG signal rows.
//!
//! Pure functions only: [`transform_signal`] maps one untrusted record to a
//! display-ready row, [`transform_batch`] isolates per-record failures, and
//! [`sort_signals`] orders the survivors without mutating its input.

pub mod batch;
pub mod sort;
pub mod transform;

pub use batch::{BatchFailure, BatchOutcome, transform_batch};
pub use sort::{compare_signals, sort_signals};
pub use transform::transform_signal;
