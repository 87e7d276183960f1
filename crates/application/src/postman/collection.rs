//! Top-level collection assembly.

use scrivener_domain::postman::BASE_URL_VARIABLE;
use scrivener_domain::{
    DocsConfig, Grouping, PostmanCollection, PostmanFolder, PostmanInfo, PostmanVariable,
    apply_override, generate_id, group_description, host_or_raw, schema_url,
};
use serde_json::Value as JsonValue;

use super::auth::AuthObjectBuilder;
use super::item::EndpointItemBuilder;
use crate::base_url::ResolvedBaseUrl;
use crate::error::ApplicationResult;
use crate::ports::BaseUrlResolver;

/// Builds a Postman collection from grouped endpoints.
pub struct CollectionBuilder<'a> {
    config: &'a DocsConfig,
    base_url: ResolvedBaseUrl,
}

impl<'a> CollectionBuilder<'a> {
    /// Creates a builder with an already resolved base URL.
    #[must_use]
    pub const fn new(config: &'a DocsConfig, base_url: ResolvedBaseUrl) -> Self {
        Self { config, base_url }
    }

    /// Creates a builder, resolving the base URL through `resolver`.
    ///
    /// Resolution is attempted once; failure falls back to the configured
    /// base URL.
    #[must_use]
    pub fn from_resolver(config: &'a DocsConfig, resolver: &dyn BaseUrlResolver) -> Self {
        Self::new(config, ResolvedBaseUrl::resolve(resolver, config))
    }

    /// Returns the base URL the collection is built against.
    #[must_use]
    pub const fn base_url(&self) -> &ResolvedBaseUrl {
        &self.base_url
    }

    /// Builds the collection. Groups and endpoints keep their input order.
    #[must_use]
    pub fn build(&self, grouping: &Grouping) -> PostmanCollection {
        tracing::debug!(
            groups = grouping.len(),
            endpoints = grouping.values().map(Vec::len).sum::<usize>(),
            base_url = self.base_url.as_str(),
            "building postman collection"
        );

        let items = EndpointItemBuilder::new(self.base_url.as_str());
        let folders = grouping
            .iter()
            .map(|(name, endpoints)| PostmanFolder {
                name: name.clone(),
                description: group_description(endpoints),
                item: endpoints.iter().map(|e| items.build(e)).collect(),
            })
            .collect();

        PostmanCollection {
            variable: vec![PostmanVariable::string(
                BASE_URL_VARIABLE,
                host_or_raw(self.base_url.as_str()),
            )],
            info: PostmanInfo {
                name: self.config.collection_name(),
                postman_id: generate_id(),
                description: self.config.description.clone().unwrap_or_default(),
                schema: schema_url(),
            },
            item: folders,
            auth: AuthObjectBuilder::build(&self.config.auth),
        }
    }

    /// Builds the collection as JSON with `postman.overrides` applied.
    ///
    /// Overrides whose path cannot be written are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be converted to JSON.
    pub fn build_document(&self, grouping: &Grouping) -> ApplicationResult<JsonValue> {
        let mut document = serde_json::to_value(self.build(grouping))?;
        for (path, value) in &self.config.postman.overrides {
            if let Err(error) = apply_override(&mut document, path, value.clone()) {
                tracing::warn!(%error, "skipping collection override");
            }
        }
        Ok(document)
    }
}
