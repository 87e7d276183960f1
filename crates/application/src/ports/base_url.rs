//! Base URL resolution port.

use thiserror::Error;

/// Errors a base URL resolver may report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither a configured value nor an application root is available.
    #[error("no base URL configured and no application URL available")]
    Unavailable,

    /// The candidate URL could not be used.
    #[error("invalid base URL: {0}")]
    Invalid(String),
}

/// Port for determining the application's effective root URL.
///
/// Implementations may depend on host-framework state and may fail. Callers
/// treat failure as non-fatal.
pub trait BaseUrlResolver: Send + Sync {
    /// Resolves the root URL, given the configured base URL if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if no usable root URL can be determined.
    fn resolve(&self, configured: Option<&str>) -> Result<String, ResolveError>;
}
