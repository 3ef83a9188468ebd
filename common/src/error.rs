//! Error handling for the ittools crates.

use thiserror::Error;

/// Common error type surfaced by every fallible ittools operation.
///
/// Type mismatches raised while building containers are reported as
/// [`CommonError::Unhashable`] or [`CommonError::NotIterable`] and are never
/// translated into another variant on their way to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: String },

    #[error("'{type_name}' object is not iterable")]
    NotIterable { type_name: String },

    #[error("Nesting stalled at depth {depth} before reaching target depth {target}")]
    NestingStalled { depth: usize, target: usize },
}

/// Result type alias for common operations.
pub type Result<T> = std::result::Result<T, CommonError>;

/// Error category for grouping related error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Arguments the caller is responsible for (zero chunk counts, zero columns)
    InvalidInput,
    /// A value did not support what a container required of it
    TypeMismatch,
    /// A container factory did not behave like a container
    Container,
}

impl CommonError {
    /// Create an invalid argument error with a custom message.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unhashable error for the given type name.
    pub fn unhashable<S: Into<String>>(type_name: S) -> Self {
        Self::Unhashable {
            type_name: type_name.into(),
        }
    }

    /// Create a not-iterable error for the given type name.
    pub fn not_iterable<S: Into<String>>(type_name: S) -> Self {
        Self::NotIterable {
            type_name: type_name.into(),
        }
    }

    /// Create a nesting stalled error.
    pub fn nesting_stalled(depth: usize, target: usize) -> Self {
        Self::NestingStalled { depth, target }
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CommonError::InvalidArgument { .. } => ErrorCategory::InvalidInput,
            CommonError::Unhashable { .. } => ErrorCategory::TypeMismatch,
            CommonError::NotIterable { .. } => ErrorCategory::TypeMismatch,
            CommonError::NestingStalled { .. } => ErrorCategory::Container,
        }
    }

    /// Check whether this error is a type mismatch raised by a container.
    pub fn is_type_error(&self) -> bool {
        self.category() == ErrorCategory::TypeMismatch
    }
}
