/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct the parser produces, from number literals
/// and variable references to assignments, operators, array literals,
/// function calls and multi-statement programs. Nodes are immutable once
/// built; the evaluator walks them with a single exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, or one of the constants `PI` and `E`.
    Number {
        /// The numeric value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable, case-sensitive.
        name: String,
    },
    /// Assignment `name = value`. Evaluates to the assigned value.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// Expression producing the new value.
        value: Box<Self>,
    },
    /// Binary arithmetic operation, e.g. `a + b`.
    BinaryOp {
        /// Left-hand operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right-hand operand.
        right: Box<Self>,
    },
    /// Prefix `+` or `-`.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
    },
    /// Postfix factorial, e.g. `5!`. Repeated `!` nests: `5!!` is `(5!)!`.
    Factorial {
        /// The operand.
        expr: Box<Self>,
    },
    /// Array literal `[a, b, ...]`.
    Array {
        /// Element expressions in source order.
        elements: Vec<Self>,
    },
    /// Function call `name(args...)`.
    FunctionCall {
        /// Name as written in the source.
        name:      String,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
    },
    /// Two or more `;`-separated statements.
    StatementList {
        /// Statements in source order.
        statements: Vec<Self>,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), written or implicit
    Mul,
    /// Division (`/`)
    Div,
    /// Truncated remainder (`%`)
    Mod,
    /// Exponentiation (`^`), right-associative
    Pow,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
