use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow, operand},
        value::core::Value,
    },
};

/// Comparison results are plain doubles: `1` for true, `0` for false.
const fn double_from(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

impl Context {
    /// Combines two already-evaluated values with an arithmetic or comparison
    /// operator.
    ///
    /// Dispatch is on the kind of the left operand:
    /// - A double on the left coerces the right operand to a number and
    ///   performs IEEE 754 arithmetic; comparisons yield `1` or `0`.
    /// - A string on the left concatenates with `+` (the right operand is
    ///   coerced to text), compares ordinally for the comparison operators,
    ///   and coerces both sides to numbers for the remaining arithmetic, so
    ///   `"456" - "123"` is `333`.
    /// - Arrays, dictionaries, functions, and `Null` support no binary
    ///   operators and produce a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `op`: The operator. Must be one of the plain arithmetic or
    ///   comparison operators; the structural operators are handled by their
    ///   own evaluation methods.
    /// - `left`: The evaluated left operand.
    /// - `right`: The evaluated right operand.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The combined value.
    pub fn eval_binary_values(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        match left {
            Value::Double(l) => Self::eval_double_op(op, *l, right, line),
            Value::String(l) => Self::eval_string_op(op, l, right, line),
            _ => Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' is not defined for a {}",
                                                                   left.kind()),
                                                  line }),
        }
    }

    /// Applies an operator whose left operand is a double.
    fn eval_double_op(op: BinaryOperator, left: f64, right: &Value, line: usize) -> EvalResult<Value> {
        let right = right.as_double(line)?;

        let result = match op {
            BinaryOperator::Pow => left.powf(right),
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Equal => double_from(left == right),
            BinaryOperator::NotEqual => double_from(left != right),
            BinaryOperator::Greater => double_from(left > right),
            BinaryOperator::Less => double_from(left < right),
            BinaryOperator::GreaterEqual => double_from(left >= right),
            BinaryOperator::LessEqual => double_from(left <= right),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' is not defined for a double"),
                                                        line });
            },
        };

        Ok(Value::Double(result))
    }

    /// Applies an operator whose left operand is a string.
    fn eval_string_op(op: BinaryOperator, left: &str, right: &Value, line: usize) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => {
                let mut joined = left.to_string();
                joined.push_str(&right.as_text(line)?);
                Ok(Value::String(joined))
            },

            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::Greater
            | BinaryOperator::Less
            | BinaryOperator::GreaterEqual
            | BinaryOperator::LessEqual => {
                let right = right.as_text(line)?;
                let result = match op {
                    BinaryOperator::Equal => left == right,
                    BinaryOperator::NotEqual => left != right,
                    BinaryOperator::Greater => left > right.as_str(),
                    BinaryOperator::Less => left < right.as_str(),
                    BinaryOperator::GreaterEqual => left >= right.as_str(),
                    _ => left <= right.as_str(),
                };
                Ok(Value::Double(double_from(result)))
            },

            BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod
            | BinaryOperator::Pow => {
                let left = Value::from(left).as_double(line)?;
                Self::eval_double_op(op, left, right, line)
            },

            _ => Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' is not defined for a string"),
                                                  line }),
        }
    }

    /// Evaluates dictionary member access, `left.name`.
    ///
    /// The left operand must evaluate to a dictionary and the right side
    /// must be a bare identifier, which is read as the key. A missing key is
    /// a `KeyNotFound`.
    ///
    /// # Parameters
    /// - `left`: The expression producing the dictionary.
    /// - `right`: The key node.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The member's value, or an escape from evaluating the left side.
    pub fn eval_member(&mut self, left: &Expr, right: &Expr, line: usize) -> EvalResult<Flow> {
        let container = operand!(self.eval(left)?);

        let Value::Dictionary(entries) = &container else {
            return Err(RuntimeError::TypeMismatch { details: format!("'.' requires a dictionary, found a {}",
                                                                     container.kind()),
                                                    line });
        };
        let Expr::Identifier { name, .. } = right else {
            return Err(RuntimeError::TypeMismatch { details: "'.' requires an identifier key".to_string(),
                                                    line });
        };

        entries.borrow()
               .get(name)
               .cloned()
               .map(Flow::Normal)
               .ok_or_else(|| RuntimeError::KeyNotFound { key: name.clone(),
                                                          line })
    }
}
