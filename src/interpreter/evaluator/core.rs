use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::function::FunctionRegistry, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables visible to an evaluation.
///
/// Variable names are case-sensitive. A `Context` is owned by the caller and
/// borrowed mutably by each evaluation, so assignments made by one call are
/// visible to the next.
///
/// # Example
/// ```
/// use calq::{Context, Value, evaluate};
///
/// let mut context = Context::new();
/// context.set("r", 2.0);
/// evaluate("area = PI * r^2", &mut context).unwrap();
///
/// assert!(context.contains("area"));
/// assert_eq!(context.get("r"), Some(&Value::Scalar(2.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    variables: HashMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    /// Removes the binding for `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Iterates over all bindings in name order.
    ///
    /// # Example
    /// ```
    /// use calq::{Context, Value};
    ///
    /// let context = [("b".to_string(), Value::Scalar(2.0)),
    ///                ("a".to_string(), Value::Scalar(1.0))].into_iter()
    ///                                                      .collect::<Context>();
    /// let names = context.iter().map(|(name, _)| name).collect::<Vec<_>>();
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries = self.variables
                              .iter()
                              .map(|(name, value)| (name.as_str(), value))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { variables: iter.into_iter().collect() }
    }
}

/// Walks a syntax tree and computes its value.
///
/// The evaluator itself is stateless apart from the function registry it
/// resolves calls against; all variable state lives in the [`Context`]
/// passed to [`Evaluator::eval`].
///
/// # Example
/// ```
/// use calq::{Context, FunctionRegistry, Value, interpreter::evaluator::Evaluator, parse};
///
/// let registry = FunctionRegistry::standard();
/// let evaluator = Evaluator::new(&registry);
/// let mut context = Context::new();
///
/// let ast = parse("x = 3; x!").unwrap();
/// assert_eq!(evaluator.eval(&ast, &mut context), Ok(Value::Scalar(6.0)));
/// assert_eq!(context.get("x"), Some(&Value::Scalar(3.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    pub(crate) registry: &'r FunctionRegistry,
}

impl<'r> Evaluator<'r> {
    /// Creates an evaluator that resolves function calls against `registry`.
    #[must_use]
    pub const fn new(registry: &'r FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables,
    /// assignments, operators, array literals, function calls and statement
    /// lists.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `context`: Variables to read and assign.
    ///
    /// # Returns
    /// The value of the expression. For a statement list, the value of the
    /// last statement.
    pub fn eval(&self, expr: &Expr, context: &mut Context) -> EvalResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Scalar(*value)),
            Expr::Variable { name } => Self::eval_variable(name, context),
            Expr::Assign { name, value } => {
                let value = self.eval(value, context)?;
                context.set(name.as_str(), value.clone());
                Ok(value)
            },
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right, context),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr, context),
            Expr::Factorial { expr } => self.eval_factorial(expr, context),
            Expr::Array { elements } => self.eval_array_literal(elements, context),
            Expr::FunctionCall { name, arguments } => {
                self.eval_function_call(name, arguments, context)
            },
            Expr::StatementList { statements } => self.eval_statements(statements, context),
        }
    }

    fn eval_variable(name: &str, context: &Context) -> EvalResult<Value> {
        context.get(name)
               .cloned()
               .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates every element in order and keeps the nesting, so
    /// `[[1, 2], [3, 4]]` becomes an array of two arrays.
    fn eval_array_literal(&self, elements: &[Expr], context: &mut Context) -> EvalResult<Value> {
        elements.iter()
                .map(|element| self.eval(element, context))
                .collect::<EvalResult<Vec<_>>>()
                .map(Value::from)
    }

    /// Evaluates statements in order and returns the last value.
    ///
    /// Assignments made before a failing statement stay in the context.
    /// An empty list evaluates to the empty array.
    fn eval_statements(&self, statements: &[Expr], context: &mut Context) -> EvalResult<Value> {
        let mut last = Value::from(Vec::new());
        for statement in statements {
            last = self.eval(statement, context)?;
        }
        Ok(last)
    }
}
