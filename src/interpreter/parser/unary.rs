use std::f64::consts;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_statement},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `+` and `-`, which may repeat (`--5`). Signs bind looser
/// than exponentiation, so `-3^2` is `-(3^2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Lexer positioned at the start of the operand.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub(crate) fn parse_unary(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let op = match tokens.peek_token()?.kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_power(tokens),
    };
    tokens.next_token()?;
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses a primary expression followed by any number of `!`.
///
/// Each `!` wraps the expression in its own `Expr::Factorial`, so `5!!` is
/// `(5!)!`.
///
/// Grammar: `postfix := primary ("!")*`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the primary expression.
///
/// # Returns
/// The primary expression, possibly wrapped in factorial nodes.
pub(crate) fn parse_postfix(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(tokens)?;
    while tokens.peek_token()?.kind == TokenKind::Bang {
        tokens.next_token()?;
        expr = Expr::Factorial { expr: Box::new(expr) };
    }
    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | identifier_or_function
///              | "(" statement ")"
///              | "[" (statement ("," statement)*)? "]"
/// ```
/// # Parameters
/// - `tokens`: Lexer positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// `UnexpectedToken` if the next token cannot begin an operand.
pub(crate) fn parse_primary(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let token = tokens.peek_token()?;
    match token.kind {
        TokenKind::Number(value) => {
            tokens.next_token()?;
            Ok(Expr::Number { value })
        },
        TokenKind::Identifier => parse_identifier_or_function(tokens),
        TokenKind::LParen => parse_grouping(tokens),
        TokenKind::LBracket => parse_array_literal(tokens),
        kind => Err(ParseError::UnexpectedToken { position: token.position,
                                                  found:    kind.describe(),
                                                  text:     token.text.to_string(), }),
    }
}

/// Parses an identifier as a constant, a function call or a variable.
///
/// Resolution order:
/// 1. `PI` and `E` (any letter case) become number literals.
/// 2. An identifier followed by `(` is a function call.
/// 3. Anything else is a variable reference.
///
/// Because constants win, `pi(2)` is the constant times `2`.
///
/// # Parameters
/// - `tokens`: Lexer positioned at an identifier.
///
/// # Returns
/// An `Expr::Number`, `Expr::FunctionCall` or `Expr::Variable`.
fn parse_identifier_or_function(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let name = expect(tokens, TokenKind::Identifier)?.text;

    if let Some(value) = constant(name) {
        return Ok(Expr::Number { value });
    }

    if tokens.peek_token()?.kind == TokenKind::LParen {
        tokens.next_token()?;
        let arguments = parse_comma_separated(tokens, TokenKind::RParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments });
    }

    Ok(Expr::Variable { name: name.to_string() })
}

/// Returns the value of a named constant, matched case-insensitively.
fn constant(name: &str) -> Option<f64> {
    match name.to_uppercase().as_str() {
        "PI" => Some(consts::PI),
        "E" => Some(consts::E),
        _ => None,
    }
}

/// Parses a parenthesized statement.
///
/// The contents may be an assignment: `(x = 2) + x` is accepted.
fn parse_grouping(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    expect(tokens, TokenKind::LParen)?;
    let inner = parse_statement(tokens)?;
    expect(tokens, TokenKind::RParen)?;
    Ok(inner)
}

/// Parses an array literal such as `[1, 2, 3]` or `[[1, 2], [3, 4]]`.
///
/// Elements are full statements and may nest arbitrarily; `[]` is the
/// empty array.
fn parse_array_literal(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    expect(tokens, TokenKind::LBracket)?;
    let elements = parse_comma_separated(tokens, TokenKind::RBracket)?;
    Ok(Expr::Array { elements })
}
