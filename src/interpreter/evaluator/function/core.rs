use std::{collections::HashMap, sync::Arc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Evaluator},
            function::{matrix, scalar},
        },
        value::Value,
    },
    util::num::fix_precision,
};

/// Signature of a scalar function: all arguments flattened into numbers.
pub type ScalarFn = fn(&[f64]) -> EvalResult<f64>;

/// Signature of a matrix function: arguments with their structure intact.
pub type MatrixFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means the function needs `n` or more arguments.
/// - `Any` leaves validation to the function itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::Any => true,
        }
    }

    /// Checks an argument count, naming `function` in the error.
    ///
    /// # Errors
    /// - `InvalidArgCount` when an exact count is not met.
    /// - `InvalidMinArgCount` when a minimum count is not met.
    ///
    /// # Example
    /// ```
    /// use calq::{error::RuntimeError, interpreter::evaluator::function::Arity};
    ///
    /// assert!(Arity::AtLeast(2).check("max", 3).is_ok());
    /// assert_eq!(Arity::Exact(1).check("sin", 2),
    ///            Err(RuntimeError::InvalidArgCount { function: "sin".into(),
    ///                                                expected: 1,
    ///                                                got:      2, }));
    /// ```
    pub fn check(self, function: &str, got: usize) -> EvalResult<()> {
        if self.accepts(got) {
            return Ok(());
        }
        match self {
            Self::Exact(expected) => Err(RuntimeError::InvalidArgCount { function: function.to_string(),
                                                                         expected,
                                                                         got }),
            Self::AtLeast(min) => Err(RuntimeError::InvalidMinArgCount { function: function.to_string(),
                                                                         min,
                                                                         got }),
            Self::Any => Ok(()),
        }
    }
}

/// A function over a flat list of numbers, e.g. `sin` or `median`.
#[derive(Debug, Clone)]
pub struct ScalarFunction {
    /// Name used in error messages.
    pub name:  String,
    /// Allowed argument counts, checked before `func` runs.
    pub arity: Arity,
    /// The implementation.
    pub func:  ScalarFn,
}

impl ScalarFunction {
    /// Creates a scalar function entry.
    pub fn new(name: impl Into<String>, arity: Arity, func: ScalarFn) -> Self {
        Self { name: name.into(),
               arity,
               func }
    }

    /// Checks the arity, runs the function and normalizes its result.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::evaluator::function::{Arity, ScalarFunction};
    ///
    /// let twice = ScalarFunction::new("twice", Arity::Exact(1), |args| Ok(args[0] * 2.0));
    /// assert_eq!(twice.call(&[0.15]), Ok(0.3));
    /// assert!(twice.call(&[1.0, 2.0]).is_err());
    /// ```
    pub fn call(&self, args: &[f64]) -> EvalResult<f64> {
        self.arity.check(&self.name, args.len())?;
        (self.func)(args).map(fix_precision)
    }
}

/// A function over structured values, e.g. `det` or `matmul`.
#[derive(Debug, Clone)]
pub struct MatrixFunction {
    /// Name used in error messages.
    pub name:  String,
    /// Allowed argument counts, checked before `func` runs.
    pub arity: Arity,
    /// The implementation.
    pub func:  MatrixFn,
}

impl MatrixFunction {
    /// Creates a matrix function entry.
    pub fn new(name: impl Into<String>, arity: Arity, func: MatrixFn) -> Self {
        Self { name: name.into(),
               arity,
               func }
    }

    /// Checks the arity and runs the function.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self.arity.check(&self.name, args.len())?;
        (self.func)(args)
    }
}

/// Maps function names to implementations.
///
/// Lookup is case-insensitive: names are stored lowercased. Scalar and
/// matrix functions live in separate tables and the same name may appear in
/// both (`mean`). An alias shares the entry of its target, so both names
/// resolve to the same `Arc`.
///
/// # Example
/// ```
/// use calq::{
///     Context, FunctionRegistry, Value, evaluate_with,
///     interpreter::evaluator::function::{Arity, ScalarFunction},
/// };
///
/// let mut registry = FunctionRegistry::empty();
/// registry.register_scalar(ScalarFunction::new("double", Arity::Exact(1), |a| Ok(a[0] * 2.0)))
///         .alias("twice", "double");
///
/// let value = evaluate_with("TWICE(21)", &mut Context::new(), &registry).unwrap();
/// assert_eq!(value, Value::Scalar(42.0));
/// assert!(evaluate_with("sin(1)", &mut Context::new(), &registry).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    scalar: HashMap<String, Arc<ScalarFunction>>,
    matrix: HashMap<String, Arc<MatrixFunction>>,
}

impl FunctionRegistry {
    /// Creates a registry with no functions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in function and alias.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        scalar::register_builtins(&mut registry);
        matrix::register_builtins(&mut registry);
        registry
    }

    /// Adds or replaces a scalar function under its lowercased name.
    pub fn register_scalar(&mut self, function: ScalarFunction) -> &mut Self {
        self.scalar
            .insert(function.name.to_lowercase(), Arc::new(function));
        self
    }

    /// Adds or replaces a matrix function under its lowercased name.
    pub fn register_matrix(&mut self, function: MatrixFunction) -> &mut Self {
        self.matrix
            .insert(function.name.to_lowercase(), Arc::new(function));
        self
    }

    /// Makes `alias` resolve to the scalar function registered as `target`.
    ///
    /// # Panics
    /// If no scalar function named `target` exists.
    pub fn alias(&mut self, alias: &str, target: &str) -> &mut Self {
        let Some(function) = self.scalar.get(&target.to_lowercase()).cloned() else {
            panic!("cannot alias '{alias}': no scalar function named '{target}'");
        };
        tracing::trace!(alias, target, "registered scalar alias");
        self.scalar.insert(alias.to_lowercase(), function);
        self
    }

    /// Makes `alias` resolve to the matrix function registered as `target`.
    ///
    /// # Panics
    /// If no matrix function named `target` exists.
    pub fn alias_matrix(&mut self, alias: &str, target: &str) -> &mut Self {
        let Some(function) = self.matrix.get(&target.to_lowercase()).cloned() else {
            panic!("cannot alias '{alias}': no matrix function named '{target}'");
        };
        tracing::trace!(alias, target, "registered matrix alias");
        self.matrix.insert(alias.to_lowercase(), function);
        self
    }

    /// Looks up a scalar function, ignoring letter case.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&Arc<ScalarFunction>> {
        self.scalar.get(&name.to_lowercase())
    }

    /// Looks up a matrix function, ignoring letter case.
    #[must_use]
    pub fn matrix(&self, name: &str) -> Option<&Arc<MatrixFunction>> {
        self.matrix.get(&name.to_lowercase())
    }

    /// Returns `true` if `name` is a scalar or matrix function.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.scalar.contains_key(&key) || self.matrix.contains_key(&key)
    }

    /// All registered names, aliases included, sorted and without
    /// duplicates.
    ///
    /// # Example
    /// ```
    /// use calq::FunctionRegistry;
    ///
    /// let registry = FunctionRegistry::standard();
    /// let names = registry.names();
    /// assert!(names.contains(&"sin"));
    /// assert!(names.contains(&"determinant"));
    /// assert!(names.windows(2).all(|w| w[0] < w[1]));
    /// ```
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.scalar
                            .keys()
                            .chain(self.matrix.keys())
                            .map(String::as_str)
                            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The matrix table is consulted first and receives the argument values
    /// unchanged. A name present in both tables only goes to the matrix
    /// function when its arity accepts the argument count. Scalar functions
    /// receive every argument flattened, depth first, into one list of
    /// numbers.
    ///
    /// # Parameters
    /// - `name`: Function name as written in the source.
    /// - `arguments`: Argument expressions, evaluated left to right.
    /// - `context`: Variables visible to the arguments.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - `UnknownFunction` if neither table has `name`.
    /// - Errors from argument evaluation and from the function itself.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     context: &mut Context)
                                     -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| self.eval(arg, context))
                            .collect::<EvalResult<Vec<_>>>()?;

        let scalar = self.registry.scalar(name);
        if let Some(function) = self.registry.matrix(name)
           && (scalar.is_none() || function.arity.accepts(args.len()))
        {
            tracing::trace!(function = %function.name, args = args.len(), "matrix call");
            return function.call(&args);
        }

        let Some(function) = scalar else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string() });
        };

        let mut numbers = Vec::with_capacity(args.len());
        for arg in &args {
            arg.collect_scalars(&mut numbers);
        }
        tracing::trace!(function = %function.name, args = numbers.len(), "scalar call");
        function.call(&numbers).map(Value::Scalar)
    }
}
