use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow, operand},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call, `name(argument)`.
    ///
    /// The argument is evaluated, the name is looked up across the scope
    /// chain, and the bound value must be a function. A fresh frame is
    /// pushed, the parameter is bound in it, and the body runs against the
    /// caller's live frame stack. The frame is popped whether or not the
    /// body fails.
    ///
    /// A `~~` in the body completes here: the call's value is whatever the
    /// return carried. A `~` keeps unwinding, crossing the call boundary
    /// toward the nearest `?` loop.
    ///
    /// # Parameters
    /// - `name`: The variable the function is bound to.
    /// - `argument`: The argument expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The call's value, or a `Flow::Break` passing through.
    ///
    /// # Errors
    /// `UninvocableValue` when the name is bound to anything but a function
    /// (including `Null` for an unbound name), plus whatever the body
    /// raises.
    pub fn eval_invoke(&mut self, name: &str, argument: &Expr, line: usize) -> EvalResult<Flow> {
        let argument = operand!(self.eval(argument)?);

        let callee = self.get(name);
        let Value::Function(function) = &callee else {
            return Err(RuntimeError::UninvocableValue { found: callee.kind().to_string(),
                                                        line });
        };

        self.enter_scope();
        self.set(&function.parameter, argument);
        let flow = self.eval(&function.body);
        self.leave_scope();

        Ok(match flow? {
            Flow::Return(value) | Flow::Normal(value) => Flow::Normal(value),
            escape @ Flow::Break(_) => escape,
        })
    }

    /// Evaluates an element read, `name[index]`.
    ///
    /// The index expression is evaluated first, then the container is looked
    /// up and read. Dictionaries take string keys, arrays take numeric
    /// indices; see `Value::element` for the error rules.
    ///
    /// # Parameters
    /// - `name`: The container variable.
    /// - `index`: The index expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The element's value, or an escape from the index expression.
    pub fn eval_deref(&mut self, name: &str, index: &Expr, line: usize) -> EvalResult<Flow> {
        let index = operand!(self.eval(index)?);
        let container = self.get(name);
        Ok(Flow::Normal(container.element(&index, line)?))
    }
}
