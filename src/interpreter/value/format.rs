use crate::{
    interpreter::value::Value,
    util::num::{MAX_SAFE_I64_INT, integer_text},
};

/// Distance below which a displayed number is treated as zero or as the
/// nearest integer.
pub const DISPLAY_EPSILON: f64 = 1e-12;

/// Maximum number of significant digits in displayed numbers.
pub const DISPLAY_DIGITS: usize = 15;

/// Formats a value in its canonical text form.
///
/// Scalars follow [`format_scalar`]; arrays render as `[v1, v2, ...]` with
/// nested arrays formatted recursively.
///
/// # Example
/// ```
/// use calq::{Context, evaluate, format};
///
/// let m = evaluate("[[1, 3], [2, 4]]", &mut Context::new()).unwrap();
/// assert_eq!(format(&m), "[[1, 3], [2, 4]]");
/// ```
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Scalar(v) => format_scalar(*v),
        Value::Array(items) => {
            let parts = items.iter().map(format_value).collect::<Vec<_>>();
            format!("[{}]", parts.join(", "))
        },
    }
}

/// Formats a scalar.
///
/// - `NaN`, `Infinity` and `-Infinity` are spelled out.
/// - Values within [`DISPLAY_EPSILON`] of zero print as `0`.
/// - Values within [`DISPLAY_EPSILON`] of an integer print as that integer.
/// - Everything else prints with at most [`DISPLAY_DIGITS`] significant
///   digits, without trailing zeros and never in scientific notation.
///
/// # Example
/// ```
/// use calq::interpreter::value::format::format_scalar;
///
/// assert_eq!(format_scalar(42.0), "42");
/// assert_eq!(format_scalar(-0.0), "0");
/// assert_eq!(format_scalar(0.1 + 0.2), "0.3");
/// assert_eq!(format_scalar(3.0 - 1e-13), "3");
/// assert_eq!(format_scalar(1.0 / 3.0), "0.333333333333333");
/// assert_eq!(format_scalar(1e-7), "0.0000001");
/// assert_eq!(format_scalar(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_scalar(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let value = normalize(value);
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_I64_INT as f64 {
        return integer_text(value);
    }

    round_significant(value).to_string()
}

fn normalize(value: f64) -> f64 {
    if value.abs() < DISPLAY_EPSILON {
        return 0.0;
    }

    let nearest = value.round_ties_even();
    if (value - nearest).abs() < DISPLAY_EPSILON {
        return nearest;
    }

    value
}

/// Rounds to [`DISPLAY_DIGITS`] significant digits by a round trip through
/// scientific notation text.
fn round_significant(value: f64) -> f64 {
    format!("{value:.prec$e}", prec = DISPLAY_DIGITS - 1).parse()
                                                         .unwrap_or(value)
}
