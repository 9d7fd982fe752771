use std::collections::HashMap;

use crate::interpreter::{evaluator::core::Context, value::core::Value};

impl Context {
    /// Pushes a fresh frame onto the scope stack.
    ///
    /// Called when a function invocation begins.
    pub fn enter_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Pops the innermost frame from the scope stack.
    ///
    /// The program frame at the bottom of the stack is never popped.
    pub fn leave_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Looks a variable up across the dynamic scope chain.
    ///
    /// The search walks from the innermost frame outward and returns the
    /// first binding found. An unbound name is not an error; it reads as
    /// `Value::Null`.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    ///
    /// # Returns
    /// The bound value, or `Value::Null` when no frame binds the name.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.get("missing"), Value::Null);
    ///
    /// context.set("x", Value::Double(3.0));
    /// assert_eq!(context.get("x"), Value::Double(3.0));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        for scope in self.scope_stack.iter().rev() {
            if let Some(value) = scope.get(name) {
                return value.clone();
            }
        }
        Value::Null
    }

    /// Binds a variable in the innermost frame only.
    ///
    /// Writes never reach outer frames, so a function that assigns a name
    /// shadowed nowhere still creates a call-local binding that disappears
    /// when the call completes.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The value to bind.
    pub fn set(&mut self, name: &str, value: Value) {
        self.scope_stack
            .last_mut()
            .expect("the program frame always exists")
            .insert(name.to_string(), value);
    }
}
