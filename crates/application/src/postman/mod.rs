//! Postman collection builders.
//!
//! [`CollectionBuilder`] is the entry point; the other builders each
//! produce one part of a request item and are pure functions of the
//! endpoint metadata and configuration.

mod auth;
mod body;
mod collection;
mod headers;
mod item;
mod url_object;

pub use auth::AuthObjectBuilder;
pub use body::{BodyEncoder, MULTIPART_FORM_DATA};
pub use collection::CollectionBuilder;
pub use headers::{DEFAULT_HEADERS, HeaderResolver, merge_keep_first, unescape_template};
pub use item::EndpointItemBuilder;
pub use url_object::{UrlObjectBuilder, encode_component, strip_markup, to_path_template};
