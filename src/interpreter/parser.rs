/// Entry points and statement-level parsing.
///
/// Parses a whole program of `;`-separated statements, including
/// assignments, and defines the `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels,
/// including implicit multiplication.
pub mod binary;

/// Unary, postfix and primary parsing.
///
/// Handles prefix signs, postfix factorials and the atoms of the grammar:
/// numbers, constants, variables, function calls, groupings and array
/// literals.
pub mod unary;

/// Utility functions for the parser.
///
/// Token expectation and comma-separated list parsing shared by several
/// grammar rules.
pub mod utils;
