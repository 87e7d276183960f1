//! Adapters implementing application ports.

mod app_url_resolver;

pub use app_url_resolver::{APP_URL_ENV, AppUrlResolver};
