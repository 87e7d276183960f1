//! Collection-level authentication descriptor.

use scrivener_domain::{AuthSettings, PostmanAuth, PostmanAuthParam};

/// Derives the collection `auth` object from configuration.
pub struct AuthObjectBuilder;

impl AuthObjectBuilder {
    /// Builds the auth descriptor.
    ///
    /// `basic` and `bearer` map to their Postman types; any other location
    /// describes an API key. Unset values stay `null`.
    #[must_use]
    pub fn build(settings: &AuthSettings) -> PostmanAuth {
        if !settings.enabled {
            return PostmanAuth::NoAuth;
        }

        match settings.location.as_deref() {
            Some("basic") => PostmanAuth::Basic,
            Some("bearer") => PostmanAuth::Bearer,
            _ => PostmanAuth::ApiKey {
                apikey: vec![
                    PostmanAuthParam::string("in", settings.location.clone()),
                    PostmanAuthParam::string("key", settings.name.clone()),
                ],
            },
        }
    }
}
