/// Function registry and call dispatch.
///
/// Defines the registry that maps case-insensitive names to scalar and
/// matrix functions, the arity rules checked before each call, and the
/// evaluator logic that routes a call to the right table.
pub mod core;
/// Built-in scalar functions.
///
/// Trigonometric, exponential, rounding, statistical and combinatorial
/// functions that work on a flattened list of numbers.
pub mod scalar;
/// Built-in matrix functions.
///
/// Functions that receive their arguments with array structure intact:
/// transpose, products, determinants, inverses and linear solves.
pub mod matrix;

pub use self::core::{Arity, FunctionRegistry, MatrixFn, MatrixFunction, ScalarFn, ScalarFunction};
