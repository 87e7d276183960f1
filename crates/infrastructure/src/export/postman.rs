//! Postman Collection v2.1 exporter.

use scrivener_application::CollectionBuilder;
use scrivener_application::ports::BaseUrlResolver;
use scrivener_domain::{DocsConfig, Grouping};

use super::ExportError;
use crate::serialization::to_json_stable;

/// Postman Collection v2.1 exporter.
pub struct PostmanExporter;

impl PostmanExporter {
    /// Builds the collection for `grouping`, applies configured overrides
    /// and renders it as JSON text.
    ///
    /// Base URL resolution failures do not fail the export.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn export(
        grouping: &Grouping,
        config: &DocsConfig,
        resolver: &dyn BaseUrlResolver,
    ) -> Result<String, ExportError> {
        let builder = CollectionBuilder::from_resolver(config, resolver);
        let document = builder.build_document(grouping)?;
        let content = to_json_stable(&document)?;

        tracing::debug!(
            bytes = content.len(),
            fallback_base_url = builder.base_url().is_fallback(),
            "exported postman collection"
        );
        Ok(content)
    }
}
