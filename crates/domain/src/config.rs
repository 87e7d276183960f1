//! Typed documentation configuration.
//!
//! Every recognized option is declared explicitly with a default, so lookups
//! are plain field accesses. Unknown keys are ignored on deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Default application name used for the derived collection title.
pub const DEFAULT_APP_NAME: &str = "Application";

/// Configuration consumed by the collection builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Base URL of the documented API.
    pub base_url: Option<String>,
    /// Collection title. Falls back to `"<app_name> API"`.
    pub title: Option<String>,
    /// Collection description.
    pub description: Option<String>,
    /// Application name, used only when `title` is unset.
    pub app_name: String,
    /// Postman-specific settings.
    pub postman: PostmanSettings,
    /// Authentication settings.
    pub auth: AuthSettings,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            title: None,
            description: None,
            app_name: DEFAULT_APP_NAME.to_string(),
            postman: PostmanSettings::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl DocsConfig {
    /// Returns the base URL to hand to the resolver.
    ///
    /// `postman.base_url` takes precedence over `base_url`; empty strings
    /// count as unset.
    #[must_use]
    pub fn configured_base_url(&self) -> Option<&str> {
        non_empty(self.postman.base_url.as_deref()).or_else(|| non_empty(self.base_url.as_deref()))
    }

    /// Returns the collection title, deriving one from `app_name` if unset.
    #[must_use]
    pub fn collection_name(&self) -> String {
        non_empty(self.title.as_deref())
            .map_or_else(|| format!("{} API", self.app_name), str::to_string)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Settings under the `postman` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanSettings {
    /// Overrides the top-level `base_url` for the exported collection.
    pub base_url: Option<String>,
    /// Dotted key paths written into the finished document, in order.
    pub overrides: IndexMap<String, JsonValue>,
}

/// Settings under the `auth` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Whether the API uses authentication at all.
    pub enabled: bool,
    /// `basic`, `bearer`, or the location of an API key (`header`, `query`, ...).
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Name of the API key (header or parameter name).
    pub name: Option<String>,
}
