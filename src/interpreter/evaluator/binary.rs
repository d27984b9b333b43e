use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Evaluator},
        value::Value,
    },
    util::num::fix_precision,
};

impl Evaluator<'_> {
    /// Evaluates both operands, then applies a binary operator to them.
    ///
    /// Operators only work on scalars. The left operand is checked first, so
    /// when both sides are arrays the error names the left side.
    ///
    /// # Errors
    /// - `ArrayNotSupportedLeft` / `ArrayNotSupportedRight` for an array
    ///   operand.
    /// - Errors from [`eval_scalar_binary`].
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 context: &mut Context)
                                 -> EvalResult<Value> {
        let left = self.eval(left, context)?;
        let right = self.eval(right, context)?;

        let Value::Scalar(l) = left else {
            return Err(RuntimeError::ArrayNotSupportedLeft { operator: op });
        };
        let Value::Scalar(r) = right else {
            return Err(RuntimeError::ArrayNotSupportedRight { operator: op });
        };

        eval_scalar_binary(op, l, r).map(Value::Scalar)
    }
}

/// Applies an arithmetic operator to two scalars.
///
/// `%` is the truncated remainder, so its sign follows the dividend. `^` is
/// plain `powf`. The result passes through [`fix_precision`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The normalized result.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `right` is zero.
/// - `ModuloByZero` if `op` is `%` and `right` is zero.
///
/// # Example
/// ```
/// use calq::{
///     ast::BinaryOperator, error::RuntimeError,
///     interpreter::evaluator::binary::eval_scalar_binary,
/// };
///
/// assert_eq!(eval_scalar_binary(BinaryOperator::Add, 0.1, 0.2), Ok(0.3));
/// assert_eq!(eval_scalar_binary(BinaryOperator::Mod, -7.0, 3.0), Ok(-1.0));
/// assert_eq!(eval_scalar_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(eval_scalar_binary(BinaryOperator::Div, 1.0, 0.0),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn eval_scalar_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
        Mod => {
            if right == 0.0 {
                return Err(RuntimeError::ModuloByZero);
            }
            left % right
        },
        Pow => left.powf(right),
    };

    Ok(fix_precision(result))
}
