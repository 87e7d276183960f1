//! Configuration loading.
//!
//! Reads a [`DocsConfig`] from YAML or JSON text. Locating and reading the
//! file is left to the caller.

use scrivener_domain::DocsConfig;
use thiserror::Error;

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors raised while parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses configuration text. Blank text yields the defaults.
///
/// # Errors
///
/// Returns an error if the text is not valid for the given format or does
/// not match the configuration schema.
pub fn load_config(text: &str, format: ConfigFormat) -> Result<DocsConfig, ConfigError> {
    if text.trim().is_empty() {
        return Ok(DocsConfig::default());
    }

    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(text)?,
        ConfigFormat::Json => serde_json::from_str(text)?,
    };
    tracing::debug!(?format, "loaded documentation config");
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_load_yaml() {
        let yaml = r#"
title: Shop API
base_url: https://shop.example.com
postman:
  overrides:
    info.version: "2.0.0"
auth:
  enabled: true
  in: query
  name: api_token
"#;
        let config = load_config(yaml, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.title.as_deref(), Some("Shop API"));
        assert_eq!(config.configured_base_url(), Some("https://shop.example.com"));
        assert_eq!(config.postman.overrides["info.version"], json!("2.0.0"));
        assert!(config.auth.enabled);
        assert_eq!(config.auth.location.as_deref(), Some("query"));
        assert_eq!(config.auth.name.as_deref(), Some("api_token"));
    }

    #[test]
    fn test_load_json() {
        let config = load_config(r#"{"app_name": "Shop"}"#, ConfigFormat::Json).unwrap();
        assert_eq!(config.collection_name(), "Shop API");
    }

    #[test]
    fn test_blank_text_is_default() {
        assert_eq!(
            load_config("  \n", ConfigFormat::Yaml).unwrap(),
            DocsConfig::default()
        );
    }

    #[test]
    fn test_invalid_text() {
        assert!(matches!(
            load_config("auth: [", ConfigFormat::Yaml),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            load_config("{", ConfigFormat::Json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("toml"), None);
    }
}
