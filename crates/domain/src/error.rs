//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A collection override path cannot be written into the document.
    #[error("invalid override path `{path}`: {reason}")]
    InvalidOverridePath {
        /// The dotted key path that was rejected.
        path: String,
        /// Why the path could not be applied.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
