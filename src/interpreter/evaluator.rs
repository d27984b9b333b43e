/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators `+ - * / % ^` on scalar operands,
/// including zero-divisor checks and precision normalization.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix signs and the postfix factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluator, the variable context and the result alias.
pub mod core;

/// Function evaluation.
///
/// Holds the function registry, the built-in scalar and matrix function
/// tables, and function call dispatch.
pub mod function;

pub use self::core::{Context, EvalResult, Evaluator};
