//! Constants shared by the measures, the refiner, and the summary.

/// Number of values a feature may take (`0`, `1`, `2`).
pub const FEATURE_ARITY: usize = 3;
/// The label value counted as positive.
pub const POSITIVE_LABEL: i64 = 1;
/// Tolerance used when comparing information measures.
pub const NUMERIC_TOLERANCE: f64 = 1e-12;

pub(crate) const PRINT_WIDTH: usize = 8;
pub(crate) const PRINT_PRECISION: usize = 5;
pub(crate) const FULL_WIDTH: usize = 60;
pub(crate) const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
