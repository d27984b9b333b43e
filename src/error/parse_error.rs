use thiserror::Error;

use crate::error::ErrorCode;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every position is a zero-based character index into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required but a different one was found.
    #[error("Syntax error at position {position}: expected {expected}, but got {found} '{text}'")]
    SyntaxError {
        /// Position of the offending token.
        position: usize,
        /// Description of the token that was required.
        expected: &'static str,
        /// Description of the token kind that was found.
        found:    &'static str,
        /// Source text of the token that was found.
        text:     String,
    },
    /// The input contained no tokens at all.
    #[error("Expression cannot be empty")]
    EmptyExpression,
    /// A token that cannot begin an operand appeared where one was required.
    #[error("Syntax error at position {position}: expected number, identifier, left parenthesis or left bracket, but got {found} '{text}'")]
    UnexpectedToken {
        /// Position of the offending token.
        position: usize,
        /// Description of the token kind that was found.
        found:    &'static str,
        /// Source text of the token that was found.
        text:     String,
    },
    /// Tokens remained after a complete program was parsed.
    #[error("Syntax error at position {position}: extra content after expression '{text}'")]
    ExtraContent {
        /// Position of the first leftover token.
        position: usize,
        /// Source text of the first leftover token.
        text:     String,
    },
    /// A character that does not start any token.
    #[error("Illegal character '{character}' at position {position}")]
    IllegalCharacter {
        /// The rejected character.
        character: char,
        /// Position of the rejected character.
        position:  usize,
    },
    /// An exponent marker was not followed by a digit, as in `1e` or `2e+`.
    #[error("Invalid scientific notation format at position {position}: expected digit")]
    InvalidScientificNotation {
        /// Position where the exponent digit was expected.
        position: usize,
    },
    /// An operator token with no arithmetic meaning reached operator
    /// construction.
    #[error("Unknown operator: {operator}")]
    UnknownOperator {
        /// Source text of the operator.
        operator: String,
    },
}

impl ParseError {
    /// Returns the stable code identifying this error kind.
    ///
    /// # Example
    /// ```
    /// use calq::error::{ErrorCode, ParseError};
    ///
    /// let err = ParseError::IllegalCharacter { character: '#',
    ///                                          position:  3, };
    /// assert_eq!(err.code(), ErrorCode::IllegalCharacter);
    /// assert_eq!(err.to_string(), "Illegal character '#' at position 3");
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::SyntaxError { .. } => ErrorCode::SyntaxError,
            Self::EmptyExpression => ErrorCode::EmptyExpression,
            Self::UnexpectedToken { .. } => ErrorCode::UnexpectedToken,
            Self::ExtraContent { .. } => ErrorCode::ExtraContent,
            Self::IllegalCharacter { .. } => ErrorCode::IllegalCharacter,
            Self::InvalidScientificNotation { .. } => ErrorCode::InvalidScientificNotation,
            Self::UnknownOperator { .. } => ErrorCode::UnknownOperator,
        }
    }

    /// Returns the source position the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::SyntaxError { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::ExtraContent { position, .. }
            | Self::IllegalCharacter { position, .. }
            | Self::InvalidScientificNotation { position } => Some(*position),
            Self::EmptyExpression | Self::UnknownOperator { .. } => None,
        }
    }
}
