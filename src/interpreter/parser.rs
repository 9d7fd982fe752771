/// Binary operator parsing.
///
/// One function per precedence level, from sequencing at the loosest down to
/// member access at the tightest. Every level is left-associative.
pub mod binary;

/// Core parsing logic.
///
/// Drives the lexer, exposes the `parse_source` entry point, and checks that
/// the whole token stream is consumed.
pub mod core;

/// Unary operator and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers with their call and
/// dereference suffixes, and bracketed groupings.
pub mod unary;
