//! Scrivener Application - Collection building
//!
//! Converts grouped endpoint metadata into a Postman Collection v2.1
//! document. Everything here is synchronous and free of I/O; the only
//! external dependency is the [`ports::BaseUrlResolver`] port.

pub mod base_url;
pub mod error;
pub mod ports;
pub mod postman;

pub use base_url::ResolvedBaseUrl;
pub use error::{ApplicationError, ApplicationResult};
pub use postman::{
    AuthObjectBuilder, BodyEncoder, CollectionBuilder, EndpointItemBuilder, HeaderResolver,
    UrlObjectBuilder,
};
