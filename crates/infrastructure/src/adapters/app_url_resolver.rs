//! Application URL resolver adapter

use scrivener_application::ports::{BaseUrlResolver, ResolveError};
use scrivener_domain::parse_absolute;

/// Environment variable holding the application's root URL.
pub const APP_URL_ENV: &str = "APP_URL";

/// Resolves the base URL from configuration, falling back to the
/// application's own root URL.
#[derive(Debug, Clone, Default)]
pub struct AppUrlResolver {
    app_url: Option<String>,
}

impl AppUrlResolver {
    /// Creates a resolver with an optional application root URL.
    #[must_use]
    pub const fn new(app_url: Option<String>) -> Self {
        Self { app_url }
    }

    /// Creates a resolver using the `APP_URL` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(APP_URL_ENV).ok())
    }
}

impl BaseUrlResolver for AppUrlResolver {
    fn resolve(&self, configured: Option<&str>) -> Result<String, ResolveError> {
        let candidate = configured
            .filter(|url| !url.is_empty())
            .or_else(|| self.app_url.as_deref().filter(|url| !url.is_empty()))
            .ok_or(ResolveError::Unavailable)?;

        parse_absolute(candidate).map_err(|e| ResolveError::Invalid(e.to_string()))?;
        Ok(candidate.trim_end_matches('/').to_string())
    }
}
