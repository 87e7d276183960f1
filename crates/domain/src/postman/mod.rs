//! Postman Collection v2.1 output model.
//!
//! The types serialize to the subset of the collection schema that
//! Postman, Insomnia and Newman read on import.

mod overrides;
mod types;

pub use overrides::apply_override;
pub use types::*;

/// Supported collection schema version.
pub const SCHEMA_VERSION: &str = "2.1.0";

/// Returns the schema URL embedded in `info.schema`.
#[must_use]
pub fn schema_url() -> String {
    format!("https://schema.getpostman.com/json/collection/v{SCHEMA_VERSION}/collection.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_url_embeds_version() {
        assert_eq!(
            schema_url(),
            "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        );
    }
}
