use thiserror::Error;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::ErrorCode,
    interpreter::value::format::format_scalar,
};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The right operand of `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The right operand of `%` was zero.
    #[error("Modulo by zero")]
    ModuloByZero,
    /// `!` was applied to a negative or fractional number.
    #[error("Factorial requires a non-negative integer, but got {}", number(.value))]
    FactorialNegative {
        /// The rejected operand.
        value: f64,
    },
    /// `!` was applied to a number whose factorial overflows `f64`.
    #[error("Factorial parameter too large (maximum supported is 170!)")]
    FactorialTooLarge,
    /// A function that works on integers received a fractional value.
    #[error("{function} requires integer arguments")]
    IntegerRequired {
        /// Name of the function.
        function: String,
    },
    /// A function parameter had to be strictly positive.
    #[error("{function} parameter must be greater than 0")]
    ParamMustBePositive {
        /// Name of the function.
        function: String,
    },
    /// `sqrt` of a negative number.
    #[error("sqrt parameter cannot be negative")]
    SqrtNegative,
    /// One of the samples passed to `corr` has no spread.
    #[error("Standard deviation is 0, cannot calculate correlation coefficient")]
    StdDevZero,

    /// A binary operator received an array on its left side.
    #[error("Operator '{operator}' does not support array as left operand")]
    ArrayNotSupportedLeft {
        /// The operator.
        operator: BinaryOperator,
    },
    /// A binary operator received an array on its right side.
    #[error("Operator '{operator}' does not support array as right operand")]
    ArrayNotSupportedRight {
        /// The operator.
        operator: BinaryOperator,
    },
    /// A prefix operator received an array.
    #[error("Unary operator '{operator}' does not support array operands")]
    ArrayNotSupportedUnary {
        /// The operator.
        operator: UnaryOperator,
    },
    /// `!` was applied to an array.
    #[error("Factorial operator '!' does not support array operands")]
    ArrayNotSupportedFactorial,
    /// A parameter that selects behaviour had to be a scalar.
    #[error("{function} axis parameter must be a scalar")]
    ScalarRequired {
        /// Name of the function.
        function: String,
    },
    /// A variable was read before it was assigned.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Name of the variable.
        name: String,
    },
    /// An array was used where a scalar was required.
    #[error("Cannot convert array to scalar")]
    ArrayToScalar,
    /// A scalar was used where an array was required.
    #[error("Cannot convert scalar to array")]
    ScalarToArray,

    /// No function with the given name exists.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The name as written in the source.
        name: String,
    },
    /// A function received the wrong number of arguments.
    #[error("Function {function} requires {expected} argument(s), but got {got}")]
    InvalidArgCount {
        /// Name of the function.
        function: String,
        /// Required number of arguments.
        expected: usize,
        /// Number of arguments supplied.
        got:      usize,
    },
    /// A variadic function received too few arguments.
    #[error("Function {function} requires at least {min} argument(s), but got {got}")]
    InvalidMinArgCount {
        /// Name of the function.
        function: String,
        /// Minimum number of arguments.
        min:      usize,
        /// Number of arguments supplied.
        got:      usize,
    },
    /// `log` was called with neither one nor two arguments.
    #[error("Function log requires 1 or 2 arguments, but got {got}")]
    LogInvalidArgs {
        /// Number of arguments supplied.
        got: usize,
    },
    /// The percentile rank was outside `[0, 100]`.
    #[error("Percentile must be between 0 and 100")]
    PercentileRange,
    /// `cov`/`covp` received an odd number of values.
    #[error("Covariance requires an even number of arguments (first half is X, second half is Y)")]
    CovEvenArgs,
    /// `cov`/`covp` received too few pairs.
    #[error("Covariance calculation requires at least {pairs} data pairs")]
    CovMinPairs {
        /// Minimum number of pairs.
        pairs: usize,
    },
    /// `corr` received an odd number of values.
    #[error("Correlation requires an even number of arguments (first half is X, second half is Y)")]
    CorrEvenArgs,
    /// `corr` received fewer than two pairs.
    #[error("Correlation calculation requires at least 2 data pairs")]
    CorrMinPairs,
    /// `dot` received an odd number of values.
    #[error("Dot product requires an even number of arguments (first half is vector X, second half is vector Y)")]
    DotEvenArgs,
    /// `dist` received an odd number of values.
    #[error("Distance calculation requires an even number of arguments (first half is point X, second half is point Y)")]
    DistEvenArgs,
    /// `manhattan` received an odd number of values.
    #[error("Manhattan distance requires an even number of arguments (first half is point X, second half is point Y)")]
    ManhattanEvenArgs,
    /// Sample variance of fewer than two values.
    #[error("Sample variance requires at least 2 arguments")]
    VarianceMinArgs,
    /// Population variance of no values.
    #[error("Population variance requires at least 1 argument")]
    VariancePopMinArgs,
    /// Sample covariance of fewer than two pairs.
    #[error("Sample covariance requires at least 2 data pairs")]
    CovarianceMinArgs,
    /// Population covariance of no pairs.
    #[error("Population covariance requires at least 1 data pair")]
    CovariancePopMinArgs,
    /// The base passed to `log(base, x)` was not positive or was 1.
    #[error("log base must be greater than 0 and not equal to 1")]
    LogBaseInvalid,
    /// The value passed to `log` was not positive.
    #[error("log parameter must be greater than 0")]
    LogParamInvalid,
    /// `geomean` received a value that is not positive.
    #[error("geomean parameters must be greater than 0")]
    GeomeanPositive,

    /// A matrix function received a scalar.
    #[error("{function} requires a vector or matrix as parameter")]
    MatrixRequired {
        /// Name of the function.
        function: String,
    },
    /// A matrix function received an empty array.
    #[error("{function} parameter cannot be empty")]
    MatrixEmpty {
        /// Name of the function.
        function: String,
    },
    /// A matrix function received a one-dimensional vector.
    #[error("{function} requires a matrix, not a vector")]
    MatrixExpected {
        /// Name of the function.
        function: String,
    },
    /// A row of a matrix argument was a scalar.
    #[error("{function}: row {row} is not an array")]
    MatrixRowNotArray {
        /// Name of the function.
        function: String,
        /// One-based index of the row.
        row:      usize,
    },
    /// The rows of a matrix argument had different lengths.
    #[error("{function}: all rows of the matrix must have the same number of columns")]
    MatrixInconsistentCols {
        /// Name of the function.
        function: String,
    },
    /// A square matrix was required.
    #[error("{function} requires a square matrix (number of rows must equal number of columns)")]
    MatrixSquareRequired {
        /// Name of the function.
        function: String,
    },
    /// A matrix element was itself an array.
    #[error("{function}: matrix elements must be scalars")]
    MatrixElementNotScalar {
        /// Name of the function.
        function: String,
    },
    /// The operands of `matmul` have incompatible shapes.
    #[error("matmul: matrix dimension mismatch, left matrix column count ({left_cols}) must equal right matrix row count ({right_rows})")]
    MatrixDimensionMismatch {
        /// Column count of the left operand.
        left_cols:  usize,
        /// Row count of the right operand.
        right_rows: usize,
    },
    /// The matrix has no inverse.
    #[error("Matrix is not invertible (singular matrix)")]
    MatrixSingular,
    /// The axis passed to `mean` was neither 0 nor 1.
    #[error("mean axis can only be 0 or 1")]
    MatrixInvalidAxis,
    /// The right-hand side of `solve` was not a column vector.
    #[error("solve: right-hand side vector b must be a column vector (e.g., [[1],[2]]), not a row vector (e.g., [1,2])")]
    SolveVectorFormat,
    /// The right-hand side of `solve` has the wrong number of rows.
    #[error("solve: row count of right-hand side vector b ({rows}) must equal the order of coefficient matrix A ({order})")]
    SolveDimensionMismatch {
        /// Row count of `b`.
        rows:  usize,
        /// Order of `A`.
        order: usize,
    },
    /// `C(n, k)` received a negative argument.
    #[error("C(n,k) parameters must be non-negative")]
    CombNonNegative,
    /// `P(n, k)` received a negative argument.
    #[error("P(n,k) parameters must be non-negative")]
    PermNonNegative,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn number(value: &f64) -> String {
    format_scalar(*value)
}

impl RuntimeError {
    /// Returns the stable code identifying this error kind.
    ///
    /// # Example
    /// ```
    /// use calq::error::{ErrorCode, RuntimeError};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.code(), ErrorCode::DivisionByZero);
    /// assert_eq!(RuntimeError::FactorialNegative { value: -1.5 }.to_string(),
    ///            "Factorial requires a non-negative integer, but got -1.5");
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::DivisionByZero,
            Self::ModuloByZero => ErrorCode::ModuloByZero,
            Self::FactorialNegative { .. } => ErrorCode::FactorialNegative,
            Self::FactorialTooLarge => ErrorCode::FactorialTooLarge,
            Self::IntegerRequired { .. } => ErrorCode::IntegerRequired,
            Self::ParamMustBePositive { .. } => ErrorCode::ParamMustBePositive,
            Self::SqrtNegative => ErrorCode::SqrtNegative,
            Self::StdDevZero => ErrorCode::StdDevZero,
            Self::ArrayNotSupportedLeft { .. } => ErrorCode::ArrayNotSupportedLeft,
            Self::ArrayNotSupportedRight { .. } => ErrorCode::ArrayNotSupportedRight,
            Self::ArrayNotSupportedUnary { .. } => ErrorCode::ArrayNotSupportedUnary,
            Self::ArrayNotSupportedFactorial => ErrorCode::ArrayNotSupportedFactorial,
            Self::ScalarRequired { .. } => ErrorCode::ScalarRequired,
            Self::UndefinedVariable { .. } => ErrorCode::UndefinedVariable,
            Self::ArrayToScalar => ErrorCode::ArrayToScalar,
            Self::ScalarToArray => ErrorCode::ScalarToArray,
            Self::UnknownFunction { .. } => ErrorCode::UnknownFunction,
            Self::InvalidArgCount { .. } => ErrorCode::InvalidArgCount,
            Self::InvalidMinArgCount { .. } => ErrorCode::InvalidMinArgCount,
            Self::LogInvalidArgs { .. } => ErrorCode::LogInvalidArgs,
            Self::PercentileRange => ErrorCode::PercentileRange,
            Self::CovEvenArgs => ErrorCode::CovEvenArgs,
            Self::CovMinPairs { .. } => ErrorCode::CovMinPairs,
            Self::CorrEvenArgs => ErrorCode::CorrEvenArgs,
            Self::CorrMinPairs => ErrorCode::CorrMinPairs,
            Self::DotEvenArgs => ErrorCode::DotEvenArgs,
            Self::DistEvenArgs => ErrorCode::DistEvenArgs,
            Self::ManhattanEvenArgs => ErrorCode::ManhattanEvenArgs,
            Self::VarianceMinArgs => ErrorCode::VarianceMinArgs,
            Self::VariancePopMinArgs => ErrorCode::VariancePopMinArgs,
            Self::CovarianceMinArgs => ErrorCode::CovarianceMinArgs,
            Self::CovariancePopMinArgs => ErrorCode::CovariancePopMinArgs,
            Self::LogBaseInvalid => ErrorCode::LogBaseInvalid,
            Self::LogParamInvalid => ErrorCode::LogParamInvalid,
            Self::GeomeanPositive => ErrorCode::GeomeanPositive,
            Self::MatrixRequired { .. } => ErrorCode::MatrixRequired,
            Self::MatrixEmpty { .. } => ErrorCode::MatrixEmpty,
            Self::MatrixExpected { .. } => ErrorCode::MatrixExpected,
            Self::MatrixRowNotArray { .. } => ErrorCode::MatrixRowNotArray,
            Self::MatrixInconsistentCols { .. } => ErrorCode::MatrixInconsistentCols,
            Self::MatrixSquareRequired { .. } => ErrorCode::MatrixSquareRequired,
            Self::MatrixElementNotScalar { .. } => ErrorCode::MatrixElementNotScalar,
            Self::MatrixDimensionMismatch { .. } => ErrorCode::MatrixDimensionMismatch,
            Self::MatrixSingular => ErrorCode::MatrixSingular,
            Self::MatrixInvalidAxis => ErrorCode::MatrixInvalidAxis,
            Self::SolveVectorFormat => ErrorCode::SolveVectorFormat,
            Self::SolveDimensionMismatch { .. } => ErrorCode::SolveDimensionMismatch,
            Self::CombNonNegative => ErrorCode::CombNonNegative,
            Self::PermNonNegative => ErrorCode::PermNonNegative,
        }
    }
}
