//! Export infrastructure.
//!
//! This module turns grouped endpoints into collection files.

mod postman;

pub use postman::PostmanExporter;

use scrivener_application::ApplicationError;
use thiserror::Error;

use crate::serialization::SerializationError;

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Building the document failed.
    #[error("build error: {0}")]
    Build(#[from] ApplicationError),
    /// Rendering the document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}
