use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Evaluator},
        value::Value,
    },
};

/// Largest `n` whose factorial is finite in `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

impl Evaluator<'_> {
    /// Evaluates a prefix sign.
    ///
    /// # Errors
    /// `ArrayNotSupportedUnary` if the operand is an array.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                context: &mut Context)
                                -> EvalResult<Value> {
        let Value::Scalar(value) = self.eval(expr, context)? else {
            return Err(RuntimeError::ArrayNotSupportedUnary { operator: op });
        };

        Ok(Value::Scalar(match op {
                             UnaryOperator::Plus => value,
                             UnaryOperator::Negate => -value,
                         }))
    }

    /// Evaluates a postfix `!`.
    ///
    /// # Errors
    /// - `ArrayNotSupportedFactorial` if the operand is an array.
    /// - Errors from [`factorial`].
    pub(crate) fn eval_factorial(&self, expr: &Expr, context: &mut Context) -> EvalResult<Value> {
        let Value::Scalar(value) = self.eval(expr, context)? else {
            return Err(RuntimeError::ArrayNotSupportedFactorial);
        };

        factorial(value).map(Value::Scalar)
    }
}

/// Computes `n!` for a non-negative integer `n` by iterative product.
///
/// # Parameters
/// - `value`: The operand.
///
/// # Returns
/// The factorial as `f64`. `0!` is `1`.
///
/// # Errors
/// - `FactorialNegative` for a negative, fractional or `NaN` operand.
/// - `FactorialTooLarge` if `value` exceeds [`MAX_FACTORIAL`].
///
/// # Example
/// ```
/// use calq::{error::RuntimeError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(0.0), Ok(1.0));
/// assert_eq!(factorial(5.0), Ok(120.0));
/// assert!(factorial(170.0).unwrap().is_finite());
/// assert_eq!(factorial(171.0), Err(RuntimeError::FactorialTooLarge));
/// assert_eq!(factorial(-1.0), Err(RuntimeError::FactorialNegative { value: -1.0 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::float_cmp)]
pub fn factorial(value: f64) -> EvalResult<f64> {
    if value < 0.0 || value != value.floor() {
        return Err(RuntimeError::FactorialNegative { value });
    }
    if value > MAX_FACTORIAL {
        return Err(RuntimeError::FactorialTooLarge);
    }

    // In [0, 170] and integral.
    let n = value as u32;
    Ok((2..=n).map(f64::from).product())
}
