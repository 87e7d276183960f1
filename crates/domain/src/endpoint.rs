//! Endpoint metadata produced by the documentation extractor.
//!
//! These types are read-only input to the collection builder. Maps keep
//! their insertion order so groups, headers and parameters come out in the
//! order they were documented.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::example::is_empty_example;

/// Ordered mapping from group (folder) name to its endpoints.
pub type Grouping = IndexMap<String, Vec<EndpointMetadata>>;

/// Suffix marking an array-typed parameter, e.g. `string[]`.
pub const ARRAY_MARKER: &str = "[]";

/// Reads an explicit `null` as the type's default.
///
/// Container-level `#[serde(default)]` only covers missing keys.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One documented HTTP operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointMetadata {
    /// Path template with named placeholders, e.g. `users/{id}`.
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    /// HTTP verbs. Only the first is used.
    #[serde(deserialize_with = "null_as_default")]
    pub methods: Vec<String>,
    /// Short human-readable name.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Whether the endpoint requires authentication.
    #[serde(deserialize_with = "null_as_default")]
    pub authenticated: bool,
    /// Description of the group this endpoint belongs to.
    pub group_description: Option<String>,
    /// Request headers. Values may contain `@{{` template escapes.
    #[serde(deserialize_with = "null_as_default")]
    pub headers: IndexMap<String, String>,
    /// Path parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub url_parameters: IndexMap<String, Parameter>,
    /// Query parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub query_parameters: IndexMap<String, Parameter>,
    /// Documented body parameters (only checked for presence).
    #[serde(deserialize_with = "null_as_default")]
    pub body_parameters: IndexMap<String, JsonValue>,
    /// Body parameters stripped down to their example values.
    #[serde(deserialize_with = "null_as_default")]
    pub clean_body_parameters: IndexMap<String, JsonValue>,
    /// File upload fields (only checked for presence).
    #[serde(deserialize_with = "null_as_default")]
    pub file_parameters: IndexMap<String, JsonValue>,
}

impl EndpointMetadata {
    /// Creates an endpoint for the given method and URI.
    #[must_use]
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            methods: vec![method.into()],
            ..Default::default()
        }
    }

    /// Returns the request method: the first documented verb.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.methods.first().map(String::as_str)
    }

    /// Looks up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the media type of the `Content-Type` header, without
    /// parameters such as `boundary`, lowercased.
    #[must_use]
    pub fn content_type(&self) -> Option<String> {
        self.header("Content-Type").map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
    }

    /// Returns the item name: the title, or the URI if the title is empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.title.is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }

    /// Builder: set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builder: add a URL parameter.
    #[must_use]
    pub fn with_url_parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.url_parameters.insert(name.into(), parameter);
        self
    }

    /// Builder: add a query parameter.
    #[must_use]
    pub fn with_query_parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.query_parameters.insert(name.into(), parameter);
        self
    }

    /// Builder: add a body parameter with its example value.
    ///
    /// Fills both `body_parameters` and `clean_body_parameters`.
    #[must_use]
    pub fn with_body_parameter(mut self, name: impl Into<String>, example: JsonValue) -> Self {
        let name = name.into();
        self.body_parameters.insert(name.clone(), example.clone());
        self.clean_body_parameters.insert(name, example);
        self
    }

    /// Builder: add a file parameter.
    #[must_use]
    pub fn with_file_parameter(mut self, name: impl Into<String>) -> Self {
        self.file_parameters.insert(name.into(), JsonValue::Null);
        self
    }
}

/// Returns the group description: the first endpoint's, if any.
#[must_use]
pub fn group_description(endpoints: &[EndpointMetadata]) -> String {
    endpoints
        .first()
        .and_then(|e| e.group_description.clone())
        .unwrap_or_default()
}

/// A documented URL or query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Example value.
    #[serde(alias = "example")]
    pub value: JsonValue,
    /// Declared type, e.g. `string`, `integer[]`, `object`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub param_type: String,
    /// Whether the parameter must be sent.
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    /// Description; may contain markup.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl Parameter {
    /// Creates a parameter with the given type and example value.
    #[must_use]
    pub fn new(param_type: impl Into<String>, value: JsonValue) -> Self {
        Self {
            value,
            param_type: param_type.into(),
            ..Default::default()
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if the type carries the array marker.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.param_type.ends_with(ARRAY_MARKER)
    }

    /// Returns true if the type is `object`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.param_type == "object"
    }

    /// Returns true if the example value is empty.
    #[must_use]
    pub fn has_empty_value(&self) -> bool {
        is_empty_example(&self.value)
    }

    /// Whether an importer should leave this parameter switched off.
    #[must_use]
    pub fn is_disabled_by_default(&self) -> bool {
        !self.required && self.has_empty_value()
    }
}
