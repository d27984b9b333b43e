use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_postfix, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the start of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;
    while matches!(tokens.peek_token()?.kind, TokenKind::Plus | TokenKind::Minus) {
        let op = token_to_binary_operator(&tokens.next_token()?)?;
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. Their operands are
/// unary expressions, so `2 * -3` is accepted.
///
/// The rule is: `term := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the start of the term.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_term(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;
    while matches!(tokens.peek_token()?.kind,
                   TokenKind::Star | TokenKind::Slash | TokenKind::Percent)
    {
        let op = token_to_binary_operator(&tokens.next_token()?)?;
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. The exponent is itself a power expression, not a unary
/// one, so a sign directly after `^` (as in `2^-3`) is rejected; write
/// `2^(-3)` instead.
///
/// The rule is: `power := implicit_mul ("^" power)?`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the base.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let left = parse_implicit_mul(tokens)?;
    if tokens.peek_token()?.kind != TokenKind::Caret {
        return Ok(left);
    }

    let op = token_to_binary_operator(&tokens.next_token()?)?;
    let right = parse_power(tokens)?;
    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right) })
}

/// Parses juxtaposed operands as a product.
///
/// An operand directly followed by an identifier or `(` is multiplied by
/// it: `2x`, `2PI`, `3(4+5)` and `(a)(b)` all parse as products. A number
/// never starts an implicit product, so `1 2` is left for the caller to
/// reject. Because exponentiation wraps this level, `2x^2` is `(2x)^2`.
///
/// The rule is: `implicit_mul := postfix (postfix)*` where each further
/// operand starts with an identifier or `(`.
///
/// # Parameters
/// - `tokens`: Lexer positioned at the first operand.
///
/// # Returns
/// A left-nested chain of `Mul` nodes, or the single operand.
pub fn parse_implicit_mul(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_postfix(tokens)?;
    while matches!(tokens.peek_token()?.kind, TokenKind::Identifier | TokenKind::LParen) {
        let right = parse_postfix(tokens)?;
        left = Expr::BinaryOp { left:  Box::new(left),
                                op:    BinaryOperator::Mul,
                                right: Box::new(right), };
    }
    Ok(left)
}

/// Maps an operator token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// The operator for `+`, `-`, `*`, `/`, `%` and `^`.
///
/// # Errors
/// `UnknownOperator` carrying the token text for any other token.
///
/// # Example
/// ```
/// use calq::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let caret = Token { kind:     TokenKind::Caret,
///                     text:     "^",
///                     position: 0, };
/// assert_eq!(token_to_binary_operator(&caret), Ok(BinaryOperator::Pow));
///
/// let bang = Token { kind:     TokenKind::Bang,
///                    text:     "!",
///                    position: 0, };
/// assert!(token_to_binary_operator(&bang).is_err());
/// ```
pub fn token_to_binary_operator(token: &Token<'_>) -> ParseResult<BinaryOperator> {
    match token.kind {
        TokenKind::Plus => Ok(BinaryOperator::Add),
        TokenKind::Minus => Ok(BinaryOperator::Sub),
        TokenKind::Star => Ok(BinaryOperator::Mul),
        TokenKind::Slash => Ok(BinaryOperator::Div),
        TokenKind::Percent => Ok(BinaryOperator::Mod),
        TokenKind::Caret => Ok(BinaryOperator::Pow),
        _ => Err(ParseError::UnknownOperator { operator: token.text.to_string() }),
    }
}
