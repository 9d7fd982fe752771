use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses expression sequences.
///
/// Handles the left-associative `;` operator, the loosest level of the
/// grammar. This is the entry point for whole programs and for the interiors
/// of `( )`, `[ ]`, and `{ }`.
///
/// The rule is: `sequence := control (";" control)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_sequence<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_control(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Sequence)
        {
            let line = *line;
            tokens.next();
            let right = parse_control(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses control flow expressions.
///
/// Handles the left-associative operators `?`, `??`, `!?`, and `::`, which
/// all share one level. Left-associativity is what ties a trailing `::` to
/// the `??` or `!?` built just before it: `a ?? b :: c` parses as
/// `(a ?? b) :: c`.
///
/// The rule is:
/// `control := assignment (("?" | "??" | "!?" | "::") assignment)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_control<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_assignment(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::While
                       | BinaryOperator::If
                       | BinaryOperator::IfNot
                       | BinaryOperator::Else)
        {
            let line = *line;
            tokens.next();
            let right = parse_assignment(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses assignment expressions.
///
/// Handles the left-associative `:` operator. What the left side may be is
/// not checked here; the evaluator decides which targets are assignable.
///
/// The rule is: `assignment := comparison (":" comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Assign)
        {
            let line = *line;
            tokens.next();
            let right = parse_comparison(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// Handles the left-associative comparison operators:
/// `=`, `!=`, `>`, `<`, `>=`, `<=`.
///
/// The rule is:
/// `comparison := additive (("=" | "!=" | ">" | "<" | ">=" | "<=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A possibly nested `Expr::Binary` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_additive(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && is_comparison_op(op)
        {
            let line = *line;
            tokens.next();
            let right = parse_additive(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_exponent(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_exponent(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Handles left-associative exponentiation: `a ^ b ^ c` parses as
/// `(a ^ b) ^ c`, consistent with every other binary level.
///
/// The rule is: `exponent := member ("^" member)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_member(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Pow)
        {
            let line = *line;
            tokens.next();
            let right = parse_member(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses dictionary member access.
///
/// Handles the left-associative `.` operator, the tightest binary level, so
/// `d.a.b` parses as `(d.a).b`.
///
/// The rule is: `member := unary ("." unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A member access expression tree.
pub fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Member)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison, assignment, control flow, sequencing, or member
/// access). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use rill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Dot => Some(BinaryOperator::Member),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Equals => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Colon => Some(BinaryOperator::Assign),
        Token::Question => Some(BinaryOperator::While),
        Token::DoubleQuestion => Some(BinaryOperator::If),
        Token::BangQuestion => Some(BinaryOperator::IfNot),
        Token::DoubleColon => Some(BinaryOperator::Else),
        Token::Semicolon => Some(BinaryOperator::Sequence),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// Supported categories:
/// - Strict relations: `<`, `>`
/// - Non-strict relations: `<=`, `>=`
/// - Equality: `=`, `!=`
///
/// # Example
/// ```
/// use rill::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(is_comparison_op(BinaryOperator::NotEqual));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Greater
             | BinaryOperator::Less
             | BinaryOperator::GreaterEqual
             | BinaryOperator::LessEqual)
}
