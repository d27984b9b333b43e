//! # calq
//!
//! calq is a mathematical expression parser and evaluator written in Rust.
//! It evaluates scalar arithmetic, arrays and matrices, variables and
//! multi-statement scripts, with a library of statistical, combinatorial and
//! linear-algebra functions.
//!
//! ```
//! use calq::{Context, evaluate, format};
//!
//! let mut context = Context::new();
//! let value = evaluate("x = 10; y = 2x; x + y", &mut context).unwrap();
//! assert_eq!(format(&value), "30");
//!
//! let m = evaluate("inv([[4, 7], [2, 6]])", &mut context).unwrap();
//! assert_eq!(format(&m), "[[0.6, -0.7], [-0.2, 0.4]]");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::LazyLock;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, together with the stable error codes that
/// identify them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Maps every error to a code and an error family.
/// - Carries source positions for syntax errors.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
pub mod interpreter;
/// General utilities: numeric conversion, statistics and matrix algebra.
///
/// These helpers work on plain numbers and values and are shared by the
/// evaluator and the built-in functions.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::{Context, Evaluator, function::FunctionRegistry},
        value::Value,
    },
};

static STANDARD_REGISTRY: LazyLock<FunctionRegistry> = LazyLock::new(FunctionRegistry::standard);

/// Parses and evaluates `source` with the built-in functions.
///
/// Assignments are written to `context` and stay there even if a later
/// statement fails.
///
/// # Parameters
/// - `source`: One or more `;`-separated statements.
/// - `context`: Variables to read and assign.
///
/// # Returns
/// The value of the last statement.
///
/// # Example
/// ```
/// use calq::{Context, Value, evaluate};
///
/// let mut context = Context::new();
/// assert_eq!(evaluate("2^3^2", &mut context), Ok(Value::Scalar(512.0)));
///
/// assert!(evaluate("a = 1; a / 0", &mut context).is_err());
/// assert_eq!(context.get("a"), Some(&Value::Scalar(1.0)));
/// ```
pub fn evaluate(source: &str, context: &mut Context) -> Result<Value, EvalError> {
    evaluate_with(source, context, &STANDARD_REGISTRY)
}

/// Parses and evaluates `source`, resolving calls against `registry`.
///
/// # Parameters
/// - `source`: One or more `;`-separated statements.
/// - `context`: Variables to read and assign.
/// - `registry`: The functions visible to the expression.
///
/// # Returns
/// The value of the last statement.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()), err)]
pub fn evaluate_with(source: &str,
                     context: &mut Context,
                     registry: &FunctionRegistry)
                     -> Result<Value, EvalError> {
    let ast = parse(source)?;
    tracing::trace!(?ast, "parsed");
    let value = Evaluator::new(registry).eval(&ast, context)?;
    Ok(value)
}

/// Parses `source` into a syntax tree without evaluating it.
///
/// # Example
/// ```
/// use calq::{Expr, ast::BinaryOperator, parse};
///
/// let ast = parse("2x").unwrap();
/// assert!(matches!(ast, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
///
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    interpreter::parser::core::parse_program(source)
}

/// Formats a value in its canonical text form.
///
/// Numbers print without floating-point noise and never in scientific
/// notation; arrays print as `[v1, v2, ...]`.
///
/// # Example
/// ```
/// use calq::{Value, format};
///
/// assert_eq!(format(&Value::Scalar(0.1 + 0.2)), "0.3");
/// assert_eq!(format(&Value::Scalar(1.0 / 0.0)), "Infinity");
/// ```
#[must_use]
pub fn format(value: &Value) -> String {
    interpreter::value::format::format_value(value)
}
