//! Request header list.

use indexmap::IndexMap;
use scrivener_domain::PostmanHeader;

/// Escaped template opener accepted in configured header values.
pub const ESCAPED_TEMPLATE_OPEN: &str = "@{{";

/// Template opener written to the collection.
pub const TEMPLATE_OPEN: &str = "{{";

/// Headers added to every request unless the endpoint sets them itself.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

/// Merges two ordered key-value lists, keeping the first value seen for
/// each key. Entries of `primary` come first, in order, followed by the
/// entries of `fallback` whose keys are not already present.
#[must_use]
pub fn merge_keep_first<'a, P, F>(primary: P, fallback: F) -> Vec<(&'a str, &'a str)>
where
    P: IntoIterator<Item = (&'a str, &'a str)>,
    F: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut merged: IndexMap<&str, &str> = IndexMap::new();
    for (key, value) in primary.into_iter().chain(fallback) {
        merged.entry(key).or_insert(value);
    }
    merged.into_iter().collect()
}

/// Replaces every `@{{` with `{{`.
#[must_use]
pub fn unescape_template(value: &str) -> String {
    value.replace(ESCAPED_TEMPLATE_OPEN, TEMPLATE_OPEN)
}

/// Builds the header list for a request item.
pub struct HeaderResolver;

impl HeaderResolver {
    /// Resolves an endpoint's headers against the defaults.
    #[must_use]
    pub fn resolve(headers: &IndexMap<String, String>) -> Vec<PostmanHeader> {
        let endpoint = headers.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        merge_keep_first(endpoint, DEFAULT_HEADERS.iter().copied())
            .into_iter()
            .map(|(key, value)| PostmanHeader::new(key, unescape_template(value)))
            .collect()
    }
}
