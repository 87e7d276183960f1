//! Scrivener Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, configuration loading and collection rendering.

pub mod adapters;
pub mod config;
pub mod export;
pub mod serialization;

pub use adapters::AppUrlResolver;
pub use config::{ConfigError, ConfigFormat, load_config};
pub use export::{ExportError, PostmanExporter};
pub use serialization::{SerializationError, from_json, to_json_stable};
