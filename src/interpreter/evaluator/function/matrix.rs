use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Arity, FunctionRegistry, MatrixFn, MatrixFunction},
        },
        value::Value,
    },
    util::{matrix, num::count_to_f64},
};

/// Matrix builtins as `(name, arity, implementation)`.
static MATRIX_TABLE: &[(&str, Arity, MatrixFn)] =
    &[("transpose", Arity::Exact(1), transpose),
      ("det", Arity::Exact(1), det),
      ("matmul", Arity::Exact(2), matmul),
      ("trace", Arity::Exact(1), trace),
      ("rank", Arity::Exact(1), rank),
      ("mean", Arity::Exact(2), mean),
      ("inv", Arity::Exact(1), inv),
      ("solve", Arity::Exact(2), solve)];

/// Alternative names, as `(alias, target)`.
pub const MATRIX_ALIASES: &[(&str, &str)] =
    &[("t", "transpose"), ("determinant", "det"), ("inverse", "inv")];

/// Adds every matrix builtin and alias to `registry`.
pub(crate) fn register_builtins(registry: &mut FunctionRegistry) {
    for &(name, arity, func) in MATRIX_TABLE {
        registry.register_matrix(MatrixFunction::new(name, arity, func));
    }
    for (alias, target) in MATRIX_ALIASES {
        registry.alias_matrix(alias, target);
    }
}

fn transpose(args: &[Value]) -> EvalResult<Value> {
    matrix::transpose(&args[0])
}

fn det(args: &[Value]) -> EvalResult<Value> {
    matrix::determinant(&args[0]).map(Value::Scalar)
}

fn matmul(args: &[Value]) -> EvalResult<Value> {
    matrix::matmul(&args[0], &args[1])
}

fn trace(args: &[Value]) -> EvalResult<Value> {
    matrix::trace(&args[0]).map(Value::Scalar)
}

fn rank(args: &[Value]) -> EvalResult<Value> {
    matrix::rank(&args[0]).map(|r| Value::Scalar(count_to_f64(r)))
}

/// `mean(M, axis)`: column means for axis `0`, row means for axis `1`.
///
/// # Errors
/// `ScalarRequired` if the axis is an array.
fn mean(args: &[Value]) -> EvalResult<Value> {
    let Value::Scalar(axis) = args[1] else {
        return Err(RuntimeError::ScalarRequired { function: "mean".to_string() });
    };
    matrix::mean(&args[0], axis)
}

fn inv(args: &[Value]) -> EvalResult<Value> {
    matrix::inverse(&args[0])
}

fn solve(args: &[Value]) -> EvalResult<Value> {
    matrix::solve(&args[0], &args[1])
}
