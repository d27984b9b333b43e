/// Numeric conversion and precision helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, together with the
/// precision normalization applied to every arithmetic result.
pub mod num;
/// Scalar statistics.
///
/// Greatest common divisor, least common multiple, integer checks, sample and
/// population variance, covariance, correlation, median and percentiles.
/// All functions work on plain `f64` slices.
pub mod stats;
/// Matrix algebra.
///
/// Shape validation for nested array values and the algorithms behind the
/// matrix functions: transpose, multiplication, trace, rank, axis means,
/// determinant, inverse and linear solve.
pub mod matrix;
