//! # rill
//!
//! rill is a tiny expression-oriented scripting language interpreter written
//! in Rust. Everything is an expression: assignment, loops, conditionals,
//! and even `;` sequencing combine into a single tree whose evaluation
//! yields the program's value. The runtime offers doubles, strings, shared
//! arrays and dictionaries, single-parameter functions, and dynamic scoping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, parser::core::parse_source, value::core::Value};

/// The shape of parsed programs.
///
/// Everything the parser produces is an `Expr`: there is no statement type,
/// since `;` is itself a binary operator. Every node carries the line it
/// started on, and the root can render itself as an indented tree for the
/// REPL's `#pretty` mode.
pub mod ast;
/// Error types for the two phases.
///
/// Parsing failures (`ParseError`) and evaluation failures (`RuntimeError`)
/// are separate enums; both display as `Error on line {line}: ...` and
/// implement `std::error::Error` so a front-end can box and print either
/// uniformly.
pub mod error;
/// The interpreter pipeline: lexer, parser, evaluator, and runtime values.
///
/// Source text flows through the lexer into a token stream, through the
/// parser into one expression tree, and through the evaluator into a single
/// `Value`.
///
/// # Responsibilities
/// - Houses the full pipeline from text to value.
/// - Threads line numbers from tokens into every reported error.
pub mod interpreter;
/// Numeric helpers shared across phases.
pub mod util;

/// Parses and evaluates one program, returning its final value.
///
/// A program is a single expression; `;` sequences sub-expressions and
/// newlines are ordinary whitespace. The provided context carries variable
/// bindings across calls, so a REPL can feed successive lines into the same
/// context. A `~` or `~~` that escapes all the way out still yields its
/// carried value.
///
/// # Errors
/// Returns a `ParseError` if the source does not parse, or a `RuntimeError`
/// if evaluation fails.
///
/// # Examples
/// ```
/// use rill::{interpret, interpreter::{evaluator::core::Context, value::core::Value}};
///
/// let mut context = Context::new();
///
/// let value = interpret("a: 2; a * 21", &mut context).unwrap();
/// assert_eq!(value, Value::Double(42.0));
///
/// // Bindings persist across calls.
/// let value = interpret("a + 1", &mut context).unwrap();
/// assert_eq!(value, Value::Double(3.0));
///
/// // Applying '?' to a dictionary has no meaning and reports an error.
/// assert!(interpret("d: {}; d ? 1", &mut context).is_err());
/// ```
pub fn interpret(source: &str, context: &mut Context) -> Result<Value, Box<dyn std::error::Error>> {
    let root = parse_source(source)?;

    match context.eval(&root) {
        Ok(flow) => Ok(flow.into_value()),
        Err(e) => Err(Box::new(e)),
    }
}
