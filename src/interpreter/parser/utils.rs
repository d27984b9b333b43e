use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::core::{ParseResult, parse_statement},
    },
};

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Lexer positioned at the required token.
/// - `kind`: The required token kind.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// `SyntaxError` naming the required and the found token if they differ.
pub(in crate::interpreter::parser) fn expect<'src>(tokens: &mut Lexer<'src>,
                                                   kind: TokenKind)
                                                   -> ParseResult<Token<'src>> {
    let token = tokens.next_token()?;
    if token.kind == kind {
        return Ok(token);
    }
    Err(ParseError::SyntaxError { position: token.position,
                                  expected: kind.describe(),
                                  found:    token.kind.describe(),
                                  text:     token.text.to_string(), })
}

/// Parses a comma-separated list of statements until a closing token.
///
/// Shared by array literals and function argument lists. The opening token
/// must already be consumed. An immediately encountered closing token
/// produces an empty list.
///
/// Grammar (simplified): `list := (statement ("," statement)*)? closing`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the first item or the closing token.
/// - `closing`: The token kind that terminates the list (`]` or `)`).
///
/// # Returns
/// The parsed items in source order.
///
/// # Errors
/// - Propagates errors from parsing an item.
/// - `SyntaxError` if an item is followed by neither `,` nor `closing`.
pub(in crate::interpreter::parser) fn parse_comma_separated(tokens: &mut Lexer<'_>,
                                                            closing: TokenKind)
                                                            -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();
    if tokens.peek_token()?.kind != closing {
        items.push(parse_statement(tokens)?);
        while tokens.peek_token()?.kind == TokenKind::Comma {
            tokens.next_token()?;
            items.push(parse_statement(tokens)?);
        }
    }
    expect(tokens, closing)?;
    Ok(items)
}
