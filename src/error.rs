//! Error types for sweep-steps.
//!
//! Provides unified error handling across construction, mutation and attribute decoding.

use core::fmt;

use crate::progression::Field;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all sweep-steps operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed input or a value that breaks a progression invariant
    InvalidArgument(ArgumentError),
    /// Operation not permitted in the progression's current state
    InvalidOperation(OperationError),
    /// Attribute set missing or carrying unparsable values
    Structure(StructureError),
}

/// Argument and invariant errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// Text does not match the `From .. To .. By ..` grammar
    Malformed(String),
    /// Increment sign disagrees with the order of the bounds
    DirectionMismatch {
        /// First value
        from: f64,
        /// Last value
        to: f64,
        /// Step size
        increment: f64,
    },
    /// Increment is positive or negative infinity
    InfiniteIncrement(f64),
}

/// State errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationError {
    /// Field belongs to a template-origin progression and cannot change
    TemplateReadOnly(Field),
}

/// Attribute decoding errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureError {
    /// Required attribute is absent
    MissingAttribute(&'static str),
    /// Attribute is present but cannot be parsed
    InvalidAttribute {
        /// Attribute name
        name: &'static str,
        /// Raw attribute text
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            Error::InvalidOperation(e) => write!(f, "Invalid operation: {}", e),
            Error::Structure(e) => write!(f, "Structural error: {}", e),
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::Malformed(text) => {
                write!(f, "'{}' is not of the form [*]From <value> To <value> By <value>", text)
            }
            ArgumentError::DirectionMismatch { from, to, increment } => write!(
                f,
                "Increment {} cannot step from {} to {}",
                increment, from, to
            ),
            ArgumentError::InfiniteIncrement(v) => write!(f, "Increment {} must be finite", v),
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::TemplateReadOnly(field) => {
                write!(f, "{} of a template progression is read-only", field)
            }
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::MissingAttribute(name) => write!(f, "Missing attribute '{}'", name),
            StructureError::InvalidAttribute { name, value } => {
                write!(f, "Attribute '{}' has unparsable value '{}'", name, value)
            }
        }
    }
}

// Conversion impls
impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Error::InvalidArgument(e)
    }
}

impl From<OperationError> for Error {
    fn from(e: OperationError) -> Self {
        Error::InvalidOperation(e)
    }
}

impl From<StructureError> for Error {
    fn from(e: StructureError) -> Self {
        Error::Structure(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ArgumentError {}

impl std::error::Error for OperationError {}

impl std::error::Error for StructureError {}
