use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized kinds; the matched text and position
/// travel alongside it in [`Token`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable, constant or function names such as `x`
    /// or `π`. Any Unicode letter or `_` starts one.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by a pattern; produced once the source is
    /// exhausted.
    Eof,
}

impl TokenKind {
    /// Returns the name used for this kind in syntax error messages.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::RParen.describe(), "')'");
    /// assert_eq!(TokenKind::Number(1.0).describe(), "NUMBER");
    /// assert_eq!(TokenKind::Eof.describe(), "END_OF_EXPRESSION");
    /// ```
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Caret => "'^'",
            Self::Bang => "'!'",
            Self::Equals => "'='",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Eof => "END_OF_EXPRESSION",
            Self::Ignored => "UNKNOWN_TYPE",
        }
    }
}

/// Why the underlying scanner rejected a slice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The slice does not start any token.
    #[default]
    IllegalCharacter,
    /// A number ended in `e`, `e+` or `e-` without exponent digits.
    MalformedExponent,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(MalformedExponent)`: If the exponent marker has no digits.
fn parse_number(lex: &mut logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if slice.ends_with(['e', 'E', '+', '-']) {
        return Err(LexErrorKind::MalformedExponent);
    }
    slice.parse().map_err(|_| LexErrorKind::MalformedExponent)
}

/// A token together with its source text and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The matched source text. Empty for [`TokenKind::Eof`].
    pub text:     &'src str,
    /// Character index of the first character of the token.
    pub position: usize,
}

/// Turns source text into positioned tokens with one token of lookahead.
///
/// After the input is exhausted every call yields an `Eof` token.
///
/// # Example
/// ```
/// use calq::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 2.5");
/// assert_eq!(lexer.peek_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().text, "x");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Equals);
///
/// let number = lexer.next_token().unwrap();
/// assert_eq!(number.kind, TokenKind::Number(2.5));
/// assert_eq!(number.position, 4);
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
#[derive(Clone)]
pub struct Lexer<'src> {
    source:      &'src str,
    inner:       logos::Lexer<'src, TokenKind>,
    peeked:      Option<Token<'src>>,
    byte_cursor: usize,
    char_cursor: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               peeked: None,
               byte_cursor: 0,
               char_cursor: 0 }
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// - `IllegalCharacter` for a character that starts no token.
    /// - `InvalidScientificNotation` for an exponent without digits; the
    ///   position is where the first exponent digit was expected.
    pub fn next_token(&mut self) -> ParseResult<Token<'src>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until [`Lexer::next_token`] is
    /// called.
    ///
    /// # Errors
    /// Same as [`Lexer::next_token`].
    pub fn peek_token(&mut self) -> ParseResult<Token<'src>> {
        if let Some(token) = self.peeked {
            return Ok(token);
        }
        let token = self.scan()?;
        self.peeked = Some(token);
        Ok(token)
    }

    fn scan(&mut self) -> ParseResult<Token<'src>> {
        let Some(result) = self.inner.next() else {
            let position = self.char_index(self.source.len());
            return Ok(Token { kind: TokenKind::Eof,
                              text: "",
                              position });
        };

        let span = self.inner.span();
        let text = self.inner.slice();
        match result {
            Ok(kind) => Ok(Token { kind,
                                   text,
                                   position: self.char_index(span.start) }),
            Err(LexErrorKind::MalformedExponent) => {
                Err(ParseError::InvalidScientificNotation { position: self.char_index(span.end) })
            },
            Err(LexErrorKind::IllegalCharacter) => {
                let position = self.char_index(span.start);
                let character = text.chars().next().unwrap_or_default();
                Err(ParseError::IllegalCharacter { character, position })
            },
        }
    }

    /// Converts a byte offset into a character index.
    ///
    /// Offsets only ever move forward, so the count resumes from the previous
    /// call.
    fn char_index(&mut self, byte: usize) -> usize {
        if byte < self.byte_cursor {
            return self.source[..byte].chars().count();
        }
        self.char_cursor += self.source[self.byte_cursor..byte].chars().count();
        self.byte_cursor = byte;
        self.char_cursor
    }
}
