use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult, Flow, operand},
};

impl Context {
    /// Evaluates `left ; right`.
    ///
    /// The left value is discarded; the sequence yields the right value. An
    /// escape from the left side skips the right side entirely.
    pub fn eval_sequence(&mut self, left: &Expr, right: &Expr) -> EvalResult<Flow> {
        operand!(self.eval(left)?);
        self.eval(right)
    }

    /// Evaluates the `?` loop.
    ///
    /// The left side is the condition, the right side the body. The body
    /// runs while the condition is truthy; the loop's value is the condition
    /// value that ended it, which is falsy on normal exit. A `~` in the body
    /// (or the condition) also ends the loop, in which case the value is the
    /// one the break carried through the condition, or the last condition
    /// value when the body broke. A `~~` anywhere keeps unwinding.
    ///
    /// # Parameters
    /// - `left`: The condition expression, re-evaluated each iteration.
    /// - `right`: The body expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The loop's final value, or a `Flow::Return` passing through.
    pub fn eval_while(&mut self, left: &Expr, right: &Expr, line: usize) -> EvalResult<Flow> {
        loop {
            let condition = match self.eval(left)? {
                Flow::Normal(value) => value,
                Flow::Break(value) => return Ok(Flow::Normal(value)),
                escape @ Flow::Return(_) => return Ok(escape),
            };

            if !condition.is_truthy(line)? {
                return Ok(Flow::Normal(condition));
            }

            match self.eval(right)? {
                Flow::Normal(_) => {},
                Flow::Break(_) => return Ok(Flow::Normal(condition)),
                escape @ Flow::Return(_) => return Ok(escape),
            }
        }
    }

    /// Evaluates `left ?? right` and `left !? right`.
    ///
    /// For `??` the right side runs when the condition is truthy; for `!?`
    /// when it is falsy. When the branch is not taken, the conditional
    /// yields the condition value itself, which is what a trailing `::` later
    /// relies on.
    ///
    /// # Parameters
    /// - `op`: Either `BinaryOperator::If` or `BinaryOperator::IfNot`.
    /// - `left`: The condition expression.
    /// - `right`: The branch expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The branch's control state, or the condition value.
    pub fn eval_conditional(&mut self,
                            op: BinaryOperator,
                            left: &Expr,
                            right: &Expr,
                            line: usize)
                            -> EvalResult<Flow> {
        let condition = operand!(self.eval(left)?);

        let mut truthy = condition.is_truthy(line)?;
        if matches!(op, BinaryOperator::IfNot) {
            truthy = !truthy;
        }

        if truthy {
            self.eval(right)
        } else {
            Ok(Flow::Normal(condition))
        }
    }

    /// Evaluates `left :: right`.
    ///
    /// The left side must be a `??` or `!?` node in the tree itself; a `::`
    /// bound to anything else is an `UnboundElse`. The condition is
    /// evaluated once, then exactly one branch runs: the conditional's own
    /// right side when it would be taken, otherwise the `::` right side.
    ///
    /// # Parameters
    /// - `left`: The conditional node supplying condition and first branch.
    /// - `right`: The alternative branch expression.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The chosen branch's control state.
    pub fn eval_else(&mut self, left: &Expr, right: &Expr, line: usize) -> EvalResult<Flow> {
        let Expr::Binary { op: op @ (BinaryOperator::If | BinaryOperator::IfNot),
                           left: condition,
                           right: consequent,
                           .. } = left
        else {
            return Err(RuntimeError::UnboundElse { line });
        };

        let condition = operand!(self.eval(condition)?);

        let mut truthy = condition.is_truthy(line)?;
        if matches!(op, &BinaryOperator::IfNot) {
            truthy = !truthy;
        }

        if truthy {
            self.eval(consequent)
        } else {
            self.eval(right)
        }
    }
}
