/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Absolute distance to an integer below which a result snaps to it.
pub const INTEGER_EPSILON: f64 = 1e-14;

/// Number of significant digits a result may be rounded to when that
/// removes only representation noise.
pub const SIGNIFICANT_DIGITS: i32 = 12;

/// Removes floating-point noise from an arithmetic result.
///
/// A value within [`INTEGER_EPSILON`] of an integer becomes that integer.
/// Otherwise, if rounding to [`SIGNIFICANT_DIGITS`] significant digits moves
/// the value by less than a relative [`INTEGER_EPSILON`], the rounded value
/// is returned. `NaN` and infinities pass through unchanged.
///
/// # Parameters
/// - `value`: The raw result.
///
/// # Returns
/// The normalized value.
///
/// # Example
/// ```
/// use calq::util::num::fix_precision;
///
/// assert_eq!(fix_precision(0.1 + 0.2), 0.3);
/// assert_eq!(fix_precision(2.000_000_000_000_001), 2.0);
/// assert_eq!(fix_precision(1.0 / 3.0), 1.0 / 3.0);
/// assert!(fix_precision(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn fix_precision(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_EPSILON {
        return nearest;
    }

    let scale = 10f64.powf(f64::from(SIGNIFICANT_DIGITS) - value.abs().log10().ceil());
    let rounded = (value * scale).round() / scale;
    if (value - rounded).abs() < INTEGER_EPSILON * value.abs() {
        return rounded;
    }

    value
}

/// Converts an `f64` to `i64` if the value is finite, integral and within
/// `±MAX_SAFE_I64_INT`.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use calq::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(12.0, ()), Ok(12));
/// assert_eq!(f64_to_i64_checked(-3.0, ()), Ok(-3));
/// assert!(f64_to_i64_checked(1.5, ()).is_err());
/// assert!(f64_to_i64_checked(1e20, ()).is_err());
/// assert!(f64_to_i64_checked(f64::NAN, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(error);
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Converts an integral `f64` to `i64` if it fits the `i64` range.
///
/// Unlike [`f64_to_i64_checked`] this accepts magnitudes above `2^53`, where
/// every finite `f64` is an integer but not every integer is representable.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use calq::util::num::f64_to_i64_integral;
///
/// assert_eq!(f64_to_i64_integral(1e16, ()), Ok(10_000_000_000_000_000));
/// assert_eq!(f64_to_i64_integral(-1e18, ()), Ok(-1_000_000_000_000_000_000));
/// assert!(f64_to_i64_integral(1e19, ()).is_err());
/// assert!(f64_to_i64_integral(0.5, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_integral<E>(value: f64, error: E) -> Result<i64, E> {
    let bound = -(i64::MIN as f64);
    if !value.is_finite() || value.fract() != 0.0 || value < -bound || value >= bound {
        return Err(error);
    }
    Ok(value as i64)
}

/// Converts an element count to `f64`.
///
/// Counts in this crate are lengths of in-memory slices and stay far below
/// `2^53`, so the conversion is exact.
///
/// ## Example
/// ```
/// use calq::util::num::count_to_f64;
///
/// assert_eq!(count_to_f64(3), 3.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn count_to_f64(count: usize) -> f64 {
    count as f64
}

/// Converts an integral `f64` into text with every digit written out.
///
/// Only used for values already known to be integral and within
/// `±MAX_SAFE_I64_INT`; anything else falls back to `f64`'s own formatting.
#[must_use]
pub(crate) fn integer_text(value: f64) -> String {
    f64_to_i64_checked(value, ()).map_or_else(|()| value.to_string(), |n| n.to_string())
}
