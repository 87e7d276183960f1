//! Structured URL objects.
//!
//! Every request URL points at the `{{baseUrl}}` collection variable; the
//! path, query and path variables come from the endpoint metadata.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scrivener_domain::postman::{BASE_URL_REFERENCE, PostmanPathVariable, PostmanQueryParam};
use scrivener_domain::{EndpointMetadata, Parameter, PostmanUrl, example_to_string};
use serde_json::Value as JsonValue;
use url::form_urlencoded;

/// Matches `{name}` and `{name?}` route placeholders.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\??\}").expect("valid regex"));

/// Matches HTML tags.
#[allow(clippy::expect_used)]
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Rewrites `{name}` and `{name?}` placeholders to `:name` path variables.
#[must_use]
pub fn to_path_template(uri: &str) -> String {
    PLACEHOLDER
        .replace_all(uri.trim_start_matches('/'), ":${1}")
        .into_owned()
}

/// Returns the placeholder names used in a route URI.
#[must_use]
pub fn placeholder_names(uri: &str) -> HashSet<&str> {
    PLACEHOLDER
        .captures_iter(uri)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Removes HTML tags from a description.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Percent-encodes a value the way HTML forms do (space as `+`).
#[must_use]
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Builds the `url` object of a request item.
#[derive(Debug, Clone)]
pub struct UrlObjectBuilder {
    protocol: &'static str,
}

impl UrlObjectBuilder {
    /// Creates a builder for the given collection base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let protocol = if base_url.starts_with("https") {
            "https"
        } else {
            "http"
        };
        Self { protocol }
    }

    /// Returns the protocol derived from the base URL.
    #[must_use]
    pub const fn protocol(&self) -> &'static str {
        self.protocol
    }

    /// Builds the URL object for one endpoint.
    #[must_use]
    pub fn build(&self, endpoint: &EndpointMetadata) -> PostmanUrl {
        let path = to_path_template(&endpoint.uri);
        let query: Vec<PostmanQueryParam> = endpoint
            .query_parameters
            .iter()
            .flat_map(|(name, parameter)| query_entries(name, parameter))
            .collect();

        let mut raw = format!("{}://{BASE_URL_REFERENCE}/{path}", self.protocol);
        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|q| format!("{}={}", encode_component(&q.key), q.value))
                .collect::<Vec<_>>()
                .join("&");
            raw.push('?');
            raw.push_str(&query_string);
        }

        PostmanUrl {
            protocol: self.protocol.to_string(),
            host: BASE_URL_REFERENCE.to_string(),
            path,
            query,
            raw,
            variable: path_variables(endpoint),
        }
    }
}

/// Expands one documented query parameter into its query entries.
///
/// Array-typed parameters become `name[0]`, `name[1]`, ...; object-typed
/// parameters with an object example become `name[field]`.
fn query_entries(name: &str, parameter: &Parameter) -> Vec<PostmanQueryParam> {
    let description = strip_markup(&parameter.description);
    let disabled = parameter.is_disabled_by_default();
    let entry = |key: String, value: &JsonValue| PostmanQueryParam {
        key,
        value: encode_component(&example_to_string(value)),
        description: description.clone(),
        disabled,
    };

    match &parameter.value {
        JsonValue::Array(items) if parameter.is_array() => items
            .iter()
            .enumerate()
            .map(|(index, item)| entry(format!("{name}[{index}]"), item))
            .collect(),
        JsonValue::Object(fields) if parameter.is_object() => fields
            .iter()
            .map(|(field, value)| entry(format!("{name}[{field}]"), value))
            .collect(),
        value if parameter.is_array() => {
            if parameter.has_empty_value() {
                Vec::new()
            } else {
                vec![entry(format!("{name}[0]"), value)]
            }
        }
        value => vec![entry(name.to_string(), value)],
    }
}

/// Path variables for URL parameters that have a placeholder in the URI.
fn path_variables(endpoint: &EndpointMetadata) -> Vec<PostmanPathVariable> {
    let placeholders = placeholder_names(&endpoint.uri);
    endpoint
        .url_parameters
        .iter()
        .filter(|(name, _)| placeholders.contains(name.as_str()))
        .map(|(name, parameter)| PostmanPathVariable {
            id: name.clone(),
            key: name.clone(),
            value: encode_component(&example_to_string(&parameter.value)),
            description: parameter.description.clone(),
        })
        .collect()
}
