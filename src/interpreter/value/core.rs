use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_index,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations. Arrays and
/// dictionaries are shared references: assigning one to a second variable
/// aliases the same storage, and mutations show through every alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Double(f64),
    /// A string value.
    String(String),
    /// A growable array of values, shared by reference.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A dictionary from string keys to values, shared by reference.
    Dictionary(Rc<RefCell<HashMap<String, Self>>>),
    /// A single-parameter function value.
    Function(Rc<Function>),
    /// The absent value. Reading an unbound variable produces `Null`.
    Null,
}

/// A user-defined function: one parameter name and a body expression.
///
/// The body is kept behind an `Rc` so the function value outlives the program
/// tree it was defined in.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The name the argument is bound to inside the call frame.
    pub parameter: String,
    /// The expression evaluated on each invocation.
    pub body:      Rc<Expr>,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<HashMap<String, Self>> for Value {
    fn from(v: HashMap<String, Self>) -> Self {
        Self::Dictionary(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Creates a fresh, empty array value.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// Creates a fresh, empty dictionary value.
    #[must_use]
    pub fn empty_dictionary() -> Self {
        Self::Dictionary(Rc::new(RefCell::new(HashMap::new())))
    }

    /// Returns a short name for the kind of this value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
            Self::Function(_) => "function",
            Self::Null => "null",
        }
    }

    /// Converts the value to an `f64`, or returns an error if it cannot be
    /// read as a number.
    ///
    /// Accepts `Value::Double` directly; a `Value::String` is parsed as a
    /// number, so `"456"` converts to `456.0`. Everything else is a
    /// `TypeMismatch`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a double or a numeric string.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Double(10.0).as_double(1).unwrap(), 10.0);
    /// assert_eq!(Value::from("456").as_double(1).unwrap(), 456.0);
    /// assert!(Value::Null.as_double(1).is_err());
    /// ```
    pub fn as_double(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Double(d) => Ok(*d),
            Self::String(s) => s.trim().parse().map_err(|_| {
                                  RuntimeError::TypeMismatch { details: format!("'{s}' cannot be read as a number"),
                                                               line }
                              }),
            _ => Err(RuntimeError::TypeMismatch { details: format!("a {} cannot be read as a number",
                                                                   self.kind()),
                                                  line }),
        }
    }

    /// Converts the value to text, or returns an error if it cannot be read
    /// as text.
    ///
    /// Accepts `Value::String` directly; a `Value::Double` is formatted.
    /// Everything else is a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(String)`: If the value is a string or a double.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    pub fn as_text(&self, line: usize) -> EvalResult<String> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Double(d) => Ok(format!("{d}")),
            _ => Err(RuntimeError::TypeMismatch { details: format!("a {} cannot be read as text",
                                                                   self.kind()),
                                                  line }),
        }
    }

    /// Returns the truth value used by `?`, `??`, `!?`, and `!`.
    ///
    /// A double is truthy when nonzero, a string when non-empty, and `Null`
    /// is always falsy. Arrays, dictionaries, and functions have no truth
    /// value and produce a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The truth value.
    /// - `Err(RuntimeError::TypeMismatch)`: For containers and functions.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Double(1.0).is_truthy(1).unwrap());
    /// assert!(!Value::from("").is_truthy(1).unwrap());
    /// assert!(!Value::Null.is_truthy(1).unwrap());
    /// assert!(Value::empty_array().is_truthy(1).is_err());
    /// ```
    pub fn is_truthy(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Double(d) => Ok(*d != 0.0),
            Self::String(s) => Ok(!s.is_empty()),
            Self::Null => Ok(false),
            _ => Err(RuntimeError::TypeMismatch { details: format!("a {} has no truth value",
                                                                   self.kind()),
                                                  line }),
        }
    }

    /// Reads an element out of a container.
    ///
    /// Dictionaries are read with string keys; a missing key is a
    /// `KeyNotFound`. Arrays are read with numeric indices, truncated toward
    /// zero; anything outside `0..len` is an `IndexOutOfRange`. Every other
    /// combination of container and index is a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `index`: The key or index value.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The element.
    /// - `Err(RuntimeError)`: As described above.
    pub fn element(&self, index: &Self, line: usize) -> EvalResult<Self> {
        match (self, index) {
            (Self::Dictionary(entries), Self::String(key)) => {
                entries.borrow()
                       .get(key)
                       .cloned()
                       .ok_or_else(|| RuntimeError::KeyNotFound { key: key.clone(),
                                                                  line })
            },

            (Self::Array(elements), Self::Double(position)) => {
                let elements = elements.borrow();
                f64_to_index(*position).and_then(|i| elements.get(i).cloned())
                                       .ok_or(RuntimeError::IndexOutOfRange { index:  *position,
                                                                              length: elements.len(),
                                                                              line })
            },

            _ => Err(RuntimeError::TypeMismatch { details: format!("a {} cannot be dereferenced by a {}",
                                                                   self.kind(),
                                                                   index.kind()),
                                                  line }),
        }
    }

    /// Writes an element into a container.
    ///
    /// Dictionary writes insert or overwrite unconditionally. Array writes
    /// overwrite an existing slot, or append when the index equals the
    /// current length; any other index is an `IndexOutOfRange`. Every other
    /// combination of container and index is a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `index`: The key or index value.
    /// - `value`: The value to store.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(())`: On success.
    /// - `Err(RuntimeError)`: As described above.
    pub fn set_element(&self, index: &Self, value: Self, line: usize) -> EvalResult<()> {
        match (self, index) {
            (Self::Dictionary(entries), Self::String(key)) => {
                entries.borrow_mut().insert(key.clone(), value);
                Ok(())
            },

            (Self::Array(elements), Self::Double(position)) => {
                let mut elements = elements.borrow_mut();
                let length = elements.len();
                match f64_to_index(*position) {
                    Some(i) if i == length => {
                        elements.push(value);
                        Ok(())
                    },
                    Some(i) if i < length => {
                        elements[i] = value;
                        Ok(())
                    },
                    _ => Err(RuntimeError::IndexOutOfRange { index: *position,
                                                             length,
                                                             line }),
                }
            },

            _ => Err(RuntimeError::TypeMismatch { details: format!("a {} cannot be dereferenced by a {}",
                                                                   self.kind(),
                                                                   index.kind()),
                                                  line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double(d) => write!(f, "{d}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(_) => write!(f, "[Array]"),
            Self::Dictionary(_) => write!(f, "[Dictionary]"),
            Self::Function(_) => write!(f, "[Function]"),
            Self::Null => Ok(()),
        }
    }
}
