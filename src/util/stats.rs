use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
    util::num::{count_to_f64, f64_to_i64_integral},
};

/// Greatest common divisor of two integers, always non-negative.
///
/// # Example
/// ```
/// use calq::util::stats::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// assert_eq!(gcd(0, 5), 5);
/// ```
#[must_use]
pub const fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    #[allow(clippy::cast_possible_wrap)]
    let result = a as i64;
    result
}

/// Least common multiple of two integers, always non-negative.
///
/// The result is `0` when either argument is `0`, and saturates instead of
/// overflowing.
///
/// # Example
/// ```
/// use calq::util::stats::lcm;
///
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(-3, 5), 15);
/// assert_eq!(lcm(0, 7), 0);
/// ```
#[must_use]
pub const fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).saturating_mul(b).saturating_abs()
}

/// Returns `value` as an integer or `IntegerRequired` naming `function`.
///
/// Any integral value in the `i64` range is accepted.
///
/// # Example
/// ```
/// use calq::{error::RuntimeError, util::stats::require_integer};
///
/// assert_eq!(require_integer(8.0, "gcd"), Ok(8));
/// assert_eq!(require_integer(1e16, "gcd"), Ok(10_000_000_000_000_000));
/// assert_eq!(require_integer(2.5, "gcd"),
///            Err(RuntimeError::IntegerRequired { function: "gcd".into() }));
/// ```
pub fn require_integer(value: f64, function: &str) -> EvalResult<i64> {
    f64_to_i64_integral(value, ()).map_err(|()| RuntimeError::IntegerRequired { function: function.to_string() })
}

/// Arithmetic mean. The slice must not be empty.
fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / count_to_f64(data.len())
}

/// Sample (`n - 1`) or population (`n`) variance.
///
/// # Errors
/// - `VarianceMinArgs` for a sample of fewer than two values.
/// - `VariancePopMinArgs` for an empty population.
///
/// # Example
/// ```
/// use calq::util::stats::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0], true), Ok(1.0));
/// assert_eq!(variance(&[2.0, 4.0], false), Ok(1.0));
/// assert!(variance(&[1.0], true).is_err());
/// ```
pub fn variance(data: &[f64], sample: bool) -> EvalResult<f64> {
    let n = data.len();
    if sample && n < 2 {
        return Err(RuntimeError::VarianceMinArgs);
    }
    if n == 0 {
        return Err(RuntimeError::VariancePopMinArgs);
    }

    let m = mean(data);
    let squares: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    let divisor = if sample { n - 1 } else { n };

    Ok(squares / count_to_f64(divisor))
}

/// Sample or population covariance of two equally long samples.
///
/// # Errors
/// - `CovarianceMinArgs` for fewer than two sample pairs.
/// - `CovariancePopMinArgs` for an empty population.
pub fn covariance(x: &[f64], y: &[f64], sample: bool) -> EvalResult<f64> {
    let n = x.len().min(y.len());
    if sample && n < 2 {
        return Err(RuntimeError::CovarianceMinArgs);
    }
    if n == 0 {
        return Err(RuntimeError::CovariancePopMinArgs);
    }

    let mean_x = mean(&x[..n]);
    let mean_y = mean(&y[..n]);
    let sum: f64 = x.iter()
                    .zip(y)
                    .map(|(a, b)| (a - mean_x) * (b - mean_y))
                    .sum();
    let divisor = if sample { n - 1 } else { n };

    Ok(sum / count_to_f64(divisor))
}

/// Pearson correlation coefficient of two equally long samples.
///
/// # Errors
/// - `CorrMinPairs` for fewer than two pairs.
/// - `StdDevZero` when either sample is constant.
///
/// # Example
/// ```
/// use calq::util::stats::correlation;
///
/// let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> EvalResult<f64> {
    if x.len().min(y.len()) < 2 {
        return Err(RuntimeError::CorrMinPairs);
    }

    let cov = covariance(x, y, true)?;
    let std_x = variance(x, true)?.sqrt();
    let std_y = variance(y, true)?.sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return Err(RuntimeError::StdDevZero);
    }

    Ok(cov / (std_x * std_y))
}

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_by_key(|v| OrderedFloat(*v));
    values
}

/// Median of a non-empty sample. Even-sized samples average the two middle
/// values.
///
/// # Example
/// ```
/// use calq::util::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median(data: &[f64]) -> f64 {
    let values = sorted(data);
    let n = values.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 0 => f64::midpoint(values[n / 2 - 1], values[n / 2]),
        _ => values[n / 2],
    }
}

/// The `p`-th percentile of a non-empty sample.
///
/// Interpolates linearly between the two nearest ranks: the rank of `p` is
/// `p / 100 * (n - 1)` in the sorted sample.
///
/// # Errors
/// `PercentileRange` if `p` is outside `[0, 100]`.
///
/// # Example
/// ```
/// use calq::util::stats::percentile;
///
/// let data = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(percentile(50.0, &data), Ok(3.0));
/// assert_eq!(percentile(25.0, &data), Ok(2.0));
/// assert!(percentile(101.0, &data).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::suboptimal_flops)]
pub fn percentile(p: f64, data: &[f64]) -> EvalResult<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(RuntimeError::PercentileRange);
    }

    let values = sorted(data);
    match values.as_slice() {
        [] => return Ok(f64::NAN),
        [only] => return Ok(*only),
        _ => {},
    }

    let rank = p / 100.0 * count_to_f64(values.len() - 1);
    let lower = rank.floor();
    let upper = rank.ceil();
    // Both ranks are within [0, n - 1].
    let (lo, hi) = (lower as usize, upper as usize);
    if lo == hi {
        return Ok(values[lo]);
    }

    let weight = rank - lower;
    Ok(values[lo] * (1.0 - weight) + values[hi] * weight)
}
