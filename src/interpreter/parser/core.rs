use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::binary::parse_sequence,
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes a source string into `(Token, line)` pairs.
///
/// Whitespace and comments are dropped by the lexer; every surviving token is
/// paired with the line it started on. A character that starts no token stops
/// lexing immediately.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token stream, or `ParseError::UnexpectedCharacter` for unlexable
/// input.
pub fn lex(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a complete program into a single expression tree.
///
/// A program is one expression; `;` sequences sub-expressions inside it, and
/// newlines are ordinary whitespace. Parsing fails if any tokens remain after
/// the root expression.
///
/// # Errors
/// Returns a `ParseError` if lexing fails, the input is empty, the grammar is
/// violated, or trailing tokens remain.
///
/// # Examples
/// ```
/// use rill::interpreter::parser::core::parse_source;
///
/// assert!(parse_source("a: 1; a + 2").is_ok());
/// assert!(parse_source("1 +").is_err());
/// assert!(parse_source("(1 + 2").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = lex(source)?;
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::UnexpectedEndOfInput { line: 1 });
    }

    let root = parse_sequence(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          line:  *line, });
    }

    Ok(root)
}
