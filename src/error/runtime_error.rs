#[derive(Debug)]
/// Represents all errors that can occur while evaluating a program.
pub enum RuntimeError {
    /// A value had the wrong kind for the operation applied to it.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The left side of `:` is not something that can be assigned to.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `::` branch whose left side is not a `??` or `!?` expression.
    UnboundElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array was indexed outside `0..=len`.
    IndexOutOfRange {
        /// The requested index, before truncation.
        index:  f64,
        /// The length of the array at the time of access.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A dictionary was read with a key it does not contain.
    KeyNotFound {
        /// The missing key.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call was made on a value that is not a function.
    UninvocableValue {
        /// The kind of value that was called.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },

            Self::UnboundElse { line } => write!(f,
                                                 "Error on line {line}: '::' must follow a '??' or '!?' expression."),

            Self::IndexOutOfRange { index, length, line } => write!(f,
                                                                    "Error on line {line}: Index {index} is out of range for an array of length {length}."),

            Self::KeyNotFound { key, line } => {
                write!(f, "Error on line {line}: Key '{key}' was not found.")
            },

            Self::UninvocableValue { found, line } => {
                write!(f, "Error on line {line}: A value of kind {found} cannot be invoked.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
