//! Error types for the Chainable core library
//!
//! The transformation functions themselves are total and never fail. Errors
//! only arise at the chain boundary (an operation the current shape does not
//! expose, a scalar rejected by policy), when parsing paths, and when loading
//! configuration.

use crate::chain::{Operation, Shape};
use thiserror::Error;

/// Main error type for Chainable operations
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was invoked on a chain whose shape does not expose it
    #[error("Unsupported operation: `{operation}` is not available on a {shape} chain")]
    UnsupportedOperation {
        operation: Operation,
        shape: Shape,
    },

    /// A scalar or null subject was rejected by the configured scalar policy
    #[error("Scalar rejected: {message} (found: {found})")]
    ScalarRejected {
        message: String,
        found: String,
    },

    /// A path string could not be parsed
    #[error("Invalid path: {path} - {message}")]
    InvalidPath {
        path: String,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
