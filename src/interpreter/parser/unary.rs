use std::iter::Peekable;

use crate::{
    ast::{Expr, RootLiteral, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_sequence, core::ParseResult},
    },
};

/// Parses unary (prefix) expressions.
///
/// Handles the prefix operators `+`, `-`, `!`, and `~~`. Prefix operators
/// nest, so `--x` parses as `-(-x)` and `~~ -x` returns the negation.
///
/// The rule is: `unary := ("+" | "-" | "!" | "~~") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Unary` node, or whatever `parse_primary` produces.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                expr: Box::new(expr),
                                line });
    }
    parse_primary(tokens)
}

/// Maps a token to its corresponding prefix operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(UnaryOperator)` if the token corresponds to a prefix operator,
/// otherwise `None`.
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        Token::DoubleTilde => Some(UnaryOperator::Return),
        _ => None,
    }
}

/// Parses primary expressions.
///
/// Primaries are the leaves and bracketed forms of the grammar:
/// - numeric and string literals
/// - `[]`, `{}`, and `~`
/// - identifiers, optionally followed by one call `( ... )` or one
///   dereference `[ ... ]`
/// - parenthesized, bracketed, and braced groupings, whose interiors are
///   full sequences
///
/// Call and dereference suffixes do not chain; `a[0][1]` is a parse error.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed primary expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    match token {
        Token::Number(value) => Ok(Expr::Number { value: *value, line }),

        Token::String(value) => Ok(Expr::String { value: value.clone(),
                                                  line }),

        Token::EmptyBrackets => Ok(Expr::Root { literal: RootLiteral::EmptyArray,
                                                line }),

        Token::EmptyBraces => Ok(Expr::Root { literal: RootLiteral::EmptyDictionary,
                                              line }),

        Token::Tilde => Ok(Expr::Root { literal: RootLiteral::Break,
                                        line }),

        Token::Identifier(name) => parse_identifier_suffix(tokens, name.clone(), line),

        Token::LParen => {
            let inner = parse_sequence(tokens)?;
            expect_closing(tokens, &Token::RParen, ')', line)?;
            Ok(inner)
        },

        Token::LBracket => {
            let inner = parse_sequence(tokens)?;
            expect_closing(tokens, &Token::RBracket, ']', line)?;
            Ok(inner)
        },

        Token::LBrace => {
            let inner = parse_sequence(tokens)?;
            expect_closing(tokens, &Token::RBrace, '}', line)?;
            Ok(inner)
        },

        token => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                   line }),
    }
}

/// Parses the optional call or dereference suffix after an identifier.
///
/// `name(...)` becomes an `Expr::Invoke` and `name[...]` becomes an
/// `Expr::Deref`; a bare identifier stays an `Expr::Identifier`. Only one
/// suffix is accepted.
fn parse_identifier_suffix<'a, I>(tokens: &mut Peekable<I>,
                                  name: String,
                                  line: usize)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let argument = parse_sequence(tokens)?;
            expect_closing(tokens, &Token::RParen, ')', line)?;
            Ok(Expr::Invoke { name,
                              argument: Box::new(argument),
                              line })
        },

        Some((Token::LBracket, _)) => {
            tokens.next();
            let index = parse_sequence(tokens)?;
            expect_closing(tokens, &Token::RBracket, ']', line)?;
            Ok(Expr::Deref { name,
                             index: Box::new(index),
                             line })
        },

        _ => Ok(Expr::Identifier { name, line }),
    }
}

/// Consumes one token and checks that it is the expected closing bracket.
fn expect_closing<'a, I>(tokens: &mut Peekable<I>,
                         expected: &Token,
                         bracket: char,
                         line: usize)
                         -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((_, l)) => Err(ParseError::UnmatchedBracket { bracket, line: *l }),
        None => Err(ParseError::UnmatchedBracket { bracket, line }),
    }
}
