use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow, operand},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to one operand.
    ///
    /// - `+` coerces the operand to a number, so `+"5"` is `5`.
    /// - `-` negates the numeric coercion, so `-"123"` is `-123`.
    /// - `!` inverts the operand's truth value, producing `1` or `0`.
    /// - `~~` evaluates the operand and starts a return escape with it.
    ///
    /// # Parameters
    /// - `op`: The prefix operator.
    /// - `expr`: The operand expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The resulting control state. Only `~~` produces a non-normal state of
    /// its own; escapes from the operand pass through untouched.
    pub fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Flow> {
        let value = operand!(self.eval(expr)?);

        Ok(match op {
            UnaryOperator::Plus => Flow::Normal(Value::Double(value.as_double(line)?)),
            UnaryOperator::Negate => Flow::Normal(Value::Double(-value.as_double(line)?)),
            UnaryOperator::Not => {
                let truthy = value.is_truthy(line)?;
                Flow::Normal(Value::Double(if truthy { 0.0 } else { 1.0 }))
            },
            UnaryOperator::Return => Flow::Return(value),
        })
    }
}
