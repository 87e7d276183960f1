//! Postman Collection v2.1 type definitions.
//!
//! Field order follows what Postman itself writes, so exported files diff
//! cleanly against collections re-saved from the app.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Collection variable holding the API host.
pub const BASE_URL_VARIABLE: &str = "baseUrl";

/// Template reference to [`BASE_URL_VARIABLE`], used as every request's host.
pub const BASE_URL_REFERENCE: &str = "{{baseUrl}}";

/// Root structure for a Postman Collection v2.1 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanCollection {
    /// Collection-level variables.
    pub variable: Vec<PostmanVariable>,
    /// Collection metadata.
    pub info: PostmanInfo,
    /// Top-level folders, one per endpoint group.
    pub item: Vec<PostmanFolder>,
    /// Collection-level authentication.
    pub auth: PostmanAuth,
}

/// Collection variable definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanVariable {
    /// Variable identifier.
    pub id: String,
    /// Variable key, referenced as `{{key}}`.
    pub key: String,
    /// Value type.
    #[serde(rename = "type")]
    pub var_type: String,
    /// Display name.
    pub name: String,
    /// Current value.
    pub value: String,
}

impl PostmanVariable {
    /// Creates a string variable whose id and key are `key`.
    ///
    /// `name` carries the value type, as Postman's own exports do.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            name: "string".to_string(),
            key,
            var_type: "string".to_string(),
            value: value.into(),
        }
    }
}

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanInfo {
    /// Collection name.
    pub name: String,
    /// Unique identifier, regenerated on every build.
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    /// Collection description.
    pub description: String,
    /// Schema URL.
    pub schema: String,
}

/// A folder grouping related requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanFolder {
    /// Folder (group) name.
    pub name: String,
    /// Group description.
    pub description: String,
    /// Requests in documented order.
    pub item: Vec<PostmanItem>,
}

/// A single request item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanItem {
    /// Item name; never empty.
    pub name: String,
    /// The request definition.
    pub request: PostmanRequest,
    /// Example responses. Always empty.
    #[serde(default)]
    pub response: Vec<JsonValue>,
}

/// Postman request definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostmanRequest {
    /// Structured URL.
    pub url: PostmanUrl,
    /// HTTP method.
    pub method: String,
    /// Request headers.
    pub header: Vec<PostmanHeader>,
    /// Request body, absent when the endpoint has no body parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PostmanBody>,
    /// Request description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Auth override. Absent means "inherit from the collection".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<PostmanAuth>,
}

/// Structured URL object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanUrl {
    /// `http` or `https`.
    pub protocol: String,
    /// Always [`BASE_URL_REFERENCE`].
    pub host: String,
    /// Path with `:name` variables.
    pub path: String,
    /// Query parameters.
    pub query: Vec<PostmanQueryParam>,
    /// Flat URL string consistent with the structured fields.
    pub raw: String,
    /// Path variables bound to `:name` segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<PostmanPathVariable>,
}

/// Query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanQueryParam {
    /// Parameter key, `name[i]` for expanded arrays.
    pub key: String,
    /// URL-encoded example value.
    pub value: String,
    /// Description without markup.
    pub description: String,
    /// Example only; not sent unless the user enables it.
    pub disabled: bool,
}

/// Path variable (for URL templates like `:id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanPathVariable {
    /// Variable identifier.
    pub id: String,
    /// Variable name as it appears after `:`.
    pub key: String,
    /// URL-encoded example value.
    pub value: String,
    /// Description.
    pub description: String,
}

/// Request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanHeader {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl PostmanHeader {
    /// Creates a header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request body. The `mode` field is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PostmanBody {
    /// Raw text body (pretty-printed JSON).
    Raw {
        /// Body text.
        raw: String,
        /// Editor hints.
        options: PostmanBodyOptions,
    },
    /// Multipart form data.
    Formdata {
        /// Text and file fields.
        formdata: Vec<PostmanFormDataParam>,
    },
}

impl PostmanBody {
    /// Creates a raw JSON body.
    #[must_use]
    pub fn raw_json(raw: impl Into<String>) -> Self {
        Self::Raw {
            raw: raw.into(),
            options: PostmanBodyOptions {
                raw: PostmanRawOptions {
                    language: "json".to_string(),
                },
            },
        }
    }

    /// Returns the body mode as written in the document.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Raw { .. } => "raw",
            Self::Formdata { .. } => "formdata",
        }
    }
}

/// Body options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanBodyOptions {
    /// Options for raw mode.
    pub raw: PostmanRawOptions,
}

/// Raw-mode options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRawOptions {
    /// Syntax highlighting language.
    pub language: String,
}

/// Form-data field. The `type` field is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostmanFormDataParam {
    /// Text field.
    Text {
        /// Field name.
        key: String,
        /// Example value.
        value: String,
    },
    /// File field. No content is embedded; users attach files after import.
    File {
        /// Field name.
        key: String,
        /// File sources. Always empty.
        src: Vec<String>,
    },
}

/// Authentication descriptor. The `type` field is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostmanAuth {
    /// No authentication.
    NoAuth,
    /// HTTP Basic authentication.
    Basic,
    /// Bearer token authentication.
    Bearer,
    /// API key sent in a header, query string or other location.
    ApiKey {
        /// `in` and `key` entries.
        apikey: Vec<PostmanAuthParam>,
    },
}

/// Auth parameter (key-value pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanAuthParam {
    /// Parameter key.
    pub key: String,
    /// Parameter value; `null` when unset in config.
    pub value: Option<String>,
    /// Value type.
    #[serde(rename = "type")]
    pub param_type: String,
}

impl PostmanAuthParam {
    /// Creates a string-typed auth parameter.
    #[must_use]
    pub fn string(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            param_type: "string".to_string(),
        }
    }
}
