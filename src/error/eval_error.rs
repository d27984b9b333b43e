use thiserror::Error;

use crate::error::{ErrorCode, ParseError, RuntimeError};

/// Any failure of a complete parse-and-evaluate run.
///
/// Displays as `[CODE] message`, e.g. `[A001] Division by zero`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The source text could not be parsed.
    #[error("[{}] {}", .0.code(), .0)]
    Parse(#[from] ParseError),
    /// The parsed program failed during evaluation.
    #[error("[{}] {}", .0.code(), .0)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Returns the stable code of the underlying error.
    ///
    /// # Example
    /// ```
    /// use calq::{Context, error::ErrorCode, evaluate};
    ///
    /// let err = evaluate("1 / 0", &mut Context::new()).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::DivisionByZero);
    /// assert_eq!(err.to_string(), "[A001] Division by zero");
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }
}
