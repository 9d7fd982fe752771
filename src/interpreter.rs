/// Executes expression trees.
///
/// The evaluator walks the tree the parser built, carrying a `Context` (the
/// scope stack) through every call. Each step yields a control result rather
/// than a bare value, which is how `~` and `~~` unwind through enclosing
/// expressions to the nearest loop or call.
///
/// # Responsibilities
/// - Evaluates every expression form: arithmetic, assignment targets,
///   loops and conditionals, calls, and container access.
/// - Dispatches binary operators on the left operand's runtime kind.
/// - Reports runtime errors such as type mismatches or invalid indices.
pub mod evaluator;
/// Turns source text into tokens.
///
/// The token set is defined declaratively with `logos`; callbacks decode
/// string escapes, parse numbers, and count newlines so later phases can
/// report line numbers. Whitespace and comments never reach the parser.
pub mod lexer;
/// Turns tokens into one expression tree.
///
/// Recursive descent with one function per precedence level, from `;` at
/// the loosest down to `.` at the tightest, all left-associative. Bracketed
/// groups restart from the top level, so a parenthesized or braced interior
/// is always a full program.
///
/// # Responsibilities
/// - Builds `Expr` nodes from the token stream.
/// - Rejects unmatched brackets, stray tokens, and truncated input with
///   located errors.
pub mod parser;
/// Runtime values and their coercions.
///
/// Doubles, strings, reference-counted arrays and dictionaries, functions,
/// and `Null`. Containers are shared on assignment, not copied; the
/// coercion methods decide which kinds read as numbers, text, or truth
/// values, and element access lives here too.
pub mod value;
