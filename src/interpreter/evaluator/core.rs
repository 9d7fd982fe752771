use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, RootLiteral},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The result of evaluating one expression.
///
/// Most expressions complete normally, but `~` and `~~` escape: a `Break`
/// travels up until the nearest `?` loop absorbs it, and a `Return` travels
/// up until the nearest invocation absorbs it. Every variant carries a value,
/// so an escape that reaches the top level still yields a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The expression completed and produced this value.
    Normal(Value),
    /// A `~` is unwinding toward the nearest enclosing `?` loop.
    Break(Value),
    /// A `~~` is unwinding toward the nearest enclosing invocation.
    Return(Value),
}

impl Flow {
    /// Extracts the carried value, whatever the control state.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Normal(value) | Self::Break(value) | Self::Return(value) => value,
        }
    }
}

/// Unwraps a `Flow` into its value, propagating escapes to the caller.
///
/// The containing function must return `EvalResult<Flow>`; a `Break` or
/// `Return` is passed through unchanged.
macro_rules! operand {
    ($flow:expr) => {
        match $flow {
            $crate::interpreter::evaluator::core::Flow::Normal(value) => value,
            escape => return Ok(escape),
        }
    };
}
pub(crate) use operand;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: a stack of variable frames that
/// grows on function invocation and shrinks when the call completes. Scoping
/// is dynamic; a function body sees whatever frames are live at call time,
/// not the frames of its definition site.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating programs, so a REPL
/// can carry bindings from one line to the next.
pub struct Context {
    /// The frame stack. The first frame is the program frame and is never
    /// popped; lookups walk from the innermost frame outward.
    pub scope_stack: Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with a single empty program frame.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()] }
    }

    /// Evaluates an expression and returns the resulting control state.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, identifiers, unary
    /// and binary operations, dereferences, and invocations. Binary operators
    /// with evaluation rules of their own (assignment, sequencing, loops,
    /// conditionals, member access) are routed to dedicated methods; the rest
    /// evaluate both operands and combine them.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The control state: `Flow::Normal` for ordinary completion, or a
    /// `Flow::Break`/`Flow::Return` escape still looking for its handler.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when an operation is applied to values of
    /// the wrong kind, an index or key is missing, or an assignment target
    /// is invalid.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Flow> {
        match expr {
            Expr::Number { value, .. } => Ok(Flow::Normal(Value::Double(*value))),

            Expr::String { value, .. } => Ok(Flow::Normal(Value::String(value.clone()))),

            Expr::Identifier { name, .. } => Ok(Flow::Normal(self.get(name))),

            Expr::Root { literal, .. } => Ok(match literal {
                                              RootLiteral::EmptyArray => {
                                                  Flow::Normal(Value::empty_array())
                                              },
                                              RootLiteral::EmptyDictionary => {
                                                  Flow::Normal(Value::empty_dictionary())
                                              },
                                              RootLiteral::Break => Flow::Break(Value::Null),
                                          }),

            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),

            Expr::Binary { op, left, right, line } => match op {
                BinaryOperator::Assign => self.eval_assign(left, right, *line),
                BinaryOperator::Sequence => self.eval_sequence(left, right),
                BinaryOperator::While => self.eval_while(left, right, *line),
                BinaryOperator::If | BinaryOperator::IfNot => {
                    self.eval_conditional(*op, left, right, *line)
                },
                BinaryOperator::Else => self.eval_else(left, right, *line),
                BinaryOperator::Member => self.eval_member(left, right, *line),
                _ => {
                    let right = operand!(self.eval(right)?);
                    let left = operand!(self.eval(left)?);
                    Ok(Flow::Normal(Self::eval_binary_values(*op, &left, &right, *line)?))
                },
            },

            Expr::Deref { name, index, line } => self.eval_deref(name, index, *line),

            Expr::Invoke { name, argument, line } => self.eval_invoke(name, argument, *line),
        }
    }
}
