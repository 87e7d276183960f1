//! Scrivener Domain - Core types
//!
//! This crate defines the input model (endpoint metadata and configuration)
//! and the output model (Postman Collection v2.1 documents).
//! All types here are pure Rust with no I/O dependencies.

pub mod base_url;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod example;
pub mod id;
pub mod postman;

pub use base_url::{host_or_raw, parse_absolute};
pub use config::{AuthSettings, DocsConfig, PostmanSettings};
pub use endpoint::{EndpointMetadata, Grouping, Parameter, group_description};
pub use error::{DomainError, DomainResult};
pub use example::{example_to_string, is_empty_example};
pub use id::generate_id;
pub use postman::{
    PostmanAuth, PostmanAuthParam, PostmanBody, PostmanBodyOptions, PostmanCollection,
    PostmanFolder, PostmanFormDataParam, PostmanHeader, PostmanInfo, PostmanItem,
    PostmanPathVariable, PostmanQueryParam, PostmanRawOptions, PostmanRequest, PostmanUrl,
    PostmanVariable, SCHEMA_VERSION, apply_override, schema_url,
};
