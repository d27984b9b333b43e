use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::{binary::parse_additive, utils::expect},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is one or more statements separated by `;`, optionally ending
/// with a single `;`. A program with a single statement yields that
/// statement's node directly; otherwise the statements are wrapped in an
/// `Expr::StatementList`.
///
/// Grammar: `program := statement (";" statement)* ";"?`
///
/// # Parameters
/// - `source`: The source text.
///
/// # Returns
/// The root node of the syntax tree.
///
/// # Errors
/// - `EmptyExpression` if the source contains no tokens.
/// - `ExtraContent` if tokens remain after the last statement.
/// - Propagates lexical and syntax errors from the statements.
///
/// # Example
/// ```
/// use calq::{ast::Expr, interpreter::parser::core::parse_program};
///
/// let ast = parse_program("x = 1; x + 1;").unwrap();
/// assert!(matches!(ast, Expr::StatementList { ref statements } if statements.len() == 2));
///
/// assert!(matches!(parse_program("42").unwrap(), Expr::Number { value } if value == 42.0));
/// assert!(parse_program("   ").is_err());
/// ```
pub fn parse_program(source: &str) -> ParseResult<Expr> {
    let mut tokens = Lexer::new(source);
    if tokens.peek_token()?.kind == TokenKind::Eof {
        return Err(ParseError::EmptyExpression);
    }

    let mut statements = vec![parse_statement(&mut tokens)?];
    while tokens.peek_token()?.kind == TokenKind::Semicolon {
        tokens.next_token()?;
        if tokens.peek_token()?.kind != TokenKind::Eof {
            statements.push(parse_statement(&mut tokens)?);
        }
    }

    let leftover = tokens.peek_token()?;
    if leftover.kind != TokenKind::Eof {
        return Err(ParseError::ExtraContent { position: leftover.position,
                                              text:     leftover.text.to_string(), });
    }

    if statements.len() == 1
       && let Some(statement) = statements.pop()
    {
        return Ok(statement);
    }
    Ok(Expr::StatementList { statements })
}

/// Parses a single statement.
///
/// A statement is either an assignment or an arithmetic expression.
/// Assignment is recognized by looking one token past the identifier, which
/// works on a cloned lexer so nothing is consumed on a miss. Assignment is
/// right-associative, so `x = y = 5` assigns both.
///
/// Grammar: `statement := IDENT "=" statement | additive`
///
/// # Parameters
/// - `tokens`: Lexer positioned at the start of the statement.
///
/// # Returns
/// An `Expr::Assign` node or an expression node.
pub fn parse_statement(tokens: &mut Lexer<'_>) -> ParseResult<Expr> {
    let first = tokens.peek_token()?;
    if first.kind == TokenKind::Identifier {
        let mut ahead = tokens.clone();
        ahead.next_token()?;
        if ahead.peek_token()?.kind == TokenKind::Equals {
            tokens.next_token()?;
            expect(tokens, TokenKind::Equals)?;
            let value = parse_statement(tokens)?;
            return Ok(Expr::Assign { name:  first.text.to_string(),
                                     value: Box::new(value), });
        }
    }
    parse_additive(tokens)
}
