//! Day-indexed signal processing: smoothing and length reconciliation.

pub(crate) mod adjust;
pub(crate) mod smooth;

/// One float per day of the year, zero-indexed.
pub type Signal = Vec<f64>;
