/// Stable error codes.
///
/// Every error the interpreter can raise maps to exactly one [`ErrorCode`].
/// Codes are grouped into families (arithmetic, syntax, type, function,
/// matrix, operator) and never change meaning between releases, so callers
/// can match on them instead of on message text.
pub mod error_code;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include illegal characters, malformed numeric literals,
/// unexpected tokens and trailing content, each carrying the character
/// position where the problem was detected.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation.
/// Runtime errors include division by zero, arrays used where scalars are
/// required, unknown functions, argument-count violations and matrix shape
/// problems.
pub mod runtime_error;

mod eval_error;

pub use error_code::{ErrorCode, ErrorFamily};
pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
