//! Best-effort base URL resolution.

use scrivener_domain::DocsConfig;

use crate::ports::BaseUrlResolver;

/// Outcome of resolving the collection's base URL.
///
/// Either variant holds a usable string; `Fallback` records that the
/// resolver failed and the configured value was used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedBaseUrl {
    /// The resolver produced the application's root URL.
    Resolved(String),
    /// The resolver failed; this is the raw configured value (possibly empty).
    Fallback(String),
}

impl ResolvedBaseUrl {
    /// Asks `resolver` once for the root URL, falling back to the configured
    /// value on failure.
    #[must_use]
    pub fn resolve(resolver: &dyn BaseUrlResolver, config: &DocsConfig) -> Self {
        let configured = config.configured_base_url();
        match resolver.resolve(configured) {
            Ok(url) => Self::Resolved(url),
            Err(error) => {
                let fallback = configured.unwrap_or_default().to_string();
                tracing::warn!(
                    %error,
                    fallback = %fallback,
                    "base URL resolution failed, using configured value"
                );
                Self::Fallback(fallback)
            }
        }
    }

    /// Returns the URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resolved(url) | Self::Fallback(url) => url,
        }
    }

    /// Returns true if resolution failed.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
