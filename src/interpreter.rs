/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies operators, resolves variables
/// against a context and dispatches function calls through a registry. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Holds the variable context and the function registry.
/// - Reports runtime errors such as division by zero or shape mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for numbers,
/// identifiers, operators and delimiters, each with its source text and
/// character position. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Offers one token of lookahead.
/// - Reports illegal characters and malformed exponents.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// supports assignments, implicit multiplication, right-associative
/// exponentiation, postfix factorials, function calls and array literals.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// Every expression evaluates to a `Value`, which is either a scalar or a
/// (possibly nested) array. The module also owns the canonical text format.
pub mod value;
