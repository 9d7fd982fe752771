/// Assignment evaluation.
///
/// Implements the four assignment target forms: variables, dictionary
/// members, container elements, and function definitions.
pub mod assign;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string operations, comparisons, and dictionary member
/// access. Operations dispatch on the kind of the left operand.
pub mod binary;

/// Control flow evaluation.
///
/// Implements sequencing, the `?` loop, the `??` and `!?` conditionals, and
/// the `::` alternative branch.
pub mod control;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, and the control
/// result type that carries break and return escapes.
pub mod core;

/// Function invocation and element access.
///
/// Handles calls on function values and reads through `name[index]`.
pub mod invoke;

/// Scope stack management.
///
/// Provides frame push/pop and variable lookup across the dynamic scope
/// chain.
pub mod scope;

/// Unary operator evaluation logic.
///
/// Implements numeric coercion, negation, logical NOT, and the return
/// escape.
pub mod unary;
