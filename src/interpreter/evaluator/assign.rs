use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow, operand},
        value::core::{Function, Value},
    },
};

impl Context {
    /// Evaluates `left : right`.
    ///
    /// Four target forms are accepted on the left:
    /// - An identifier binds the value in the innermost frame.
    /// - A `.` member access writes into a dictionary, inserting or
    ///   overwriting the key.
    /// - A dereference writes into an array (overwrite in range, append at
    ///   the length) or a dictionary.
    /// - A call form defines a function: the argument must be a bare
    ///   identifier naming the parameter, the right side becomes the body
    ///   unevaluated, and the resulting function value is bound under the
    ///   call's name.
    ///
    /// Anything else on the left is an `InvalidAssignmentTarget`. Except for
    /// function definitions, the right side is evaluated first and the
    /// assignment yields the assigned value.
    ///
    /// # Parameters
    /// - `left`: The target expression.
    /// - `right`: The value expression (or function body).
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The assigned value, or an escape from one of the sub-evaluations.
    pub fn eval_assign(&mut self, left: &Expr, right: &Expr, line: usize) -> EvalResult<Flow> {
        // Function definitions capture the body; nothing on the right runs.
        if let Expr::Invoke { name, argument, .. } = left {
            let Expr::Identifier { name: parameter, .. } = argument.as_ref() else {
                return Err(RuntimeError::InvalidAssignmentTarget { line });
            };

            let function = Value::Function(Rc::new(Function { parameter: parameter.clone(),
                                                              body:      Rc::new(right.clone()), }));
            self.set(name, function.clone());
            return Ok(Flow::Normal(function));
        }

        let value = operand!(self.eval(right)?);

        match left {
            Expr::Identifier { name, .. } => {
                self.set(name, value.clone());
            },

            Expr::Binary { op: BinaryOperator::Member,
                           left: container,
                           right: key,
                           .. } => {
                let container = operand!(self.eval(container)?);
                let Value::Dictionary(entries) = &container else {
                    return Err(RuntimeError::TypeMismatch { details: format!("'.' requires a dictionary, found a {}",
                                                                             container.kind()),
                                                            line });
                };
                let Expr::Identifier { name, .. } = key.as_ref() else {
                    return Err(RuntimeError::TypeMismatch { details: "'.' requires an identifier key".to_string(),
                                                            line });
                };
                entries.borrow_mut().insert(name.clone(), value.clone());
            },

            Expr::Deref { name, index, .. } => {
                let index = operand!(self.eval(index)?);
                let container = self.get(name);
                container.set_element(&index, value.clone(), line)?;
            },

            _ => return Err(RuntimeError::InvalidAssignmentTarget { line }),
        }

        Ok(Flow::Normal(value))
    }
}
