//! Base URL helpers.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Parses `raw` as an absolute URL with a host.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] if the string is not an absolute URL
/// or has no host component.
pub fn parse_absolute(raw: &str) -> DomainResult<Url> {
    let url = Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.host_str().is_none() {
        return Err(DomainError::InvalidUrl(format!("{raw}: missing host")));
    }
    Ok(url)
}

/// Returns the bare host of `base_url`, or the raw string when it is not a
/// well-formed absolute URL.
#[must_use]
pub fn host_or_raw(base_url: &str) -> String {
    parse_absolute(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string())
}
