//! Error types for Polyfold.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Most Polyfold operations are total and recover instead of failing; these
//! errors surface from the `try_*` primitives the recovering operations are
//! built on.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;

/// The main error type for Polyfold operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an error for invoking something that is not a function.
    #[must_use]
    pub fn not_callable(actual: Kind) -> Self {
        Self::new(ErrorKind::NotCallable(actual))
    }

    /// Creates an error for a value with no JSON representation.
    #[must_use]
    pub fn not_serializable(actual: Kind) -> Self {
        Self::new(ErrorKind::NotSerializable(actual))
    }

    /// Creates a caller-signalled failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failed(message.into()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Json(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had the wrong shape for the requested operation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Kind,
        /// The actual kind encountered.
        actual: Kind,
    },

    /// Attempted to invoke a non-function value.
    #[error("not callable: {0}")]
    NotCallable(Kind),

    /// JSON text could not be parsed or produced.
    #[error("json error: {0}")]
    Json(serde_json::Error),

    /// The value has no JSON representation.
    #[error("not serializable: {0}")]
    NotSerializable(Kind),

    /// A failure signalled by caller code (see `try_catch`).
    #[error("failed: {0}")]
    Failed(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(operation) => write!(f, "in {operation}"),
            None => Ok(()),
        }
    }
}

/// Result type alias using Polyfold's Error.
pub type Result<T> = std::result::Result<T, Error>;
