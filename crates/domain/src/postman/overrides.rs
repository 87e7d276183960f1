//! Dotted-path overrides applied to a rendered collection.

use serde_json::{Map, Value as JsonValue};

use crate::error::{DomainError, DomainResult};

/// Writes `value` at the dotted `path` inside `document`.
///
/// Missing intermediate objects are created. An existing value at the
/// final segment is replaced.
///
/// # Errors
///
/// Returns [`DomainError::InvalidOverridePath`] if the path is empty, has an
/// empty segment, or crosses a value that is not an object.
pub fn apply_override(document: &mut JsonValue, path: &str, value: JsonValue) -> DomainResult<()> {
    let invalid = |reason: &str| DomainError::InvalidOverridePath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(invalid("empty segment"));
    }
    let Some((last, parents)) = segments.split_last() else {
        return Err(invalid("empty path"));
    };

    let mut current = document;
    for segment in parents {
        let object = current
            .as_object_mut()
            .ok_or_else(|| invalid("crosses a non-object value"))?;
        current = object
            .entry((*segment).to_string())
            .or_insert_with(|| JsonValue::Object(Map::new()));
    }

    let object = current
        .as_object_mut()
        .ok_or_else(|| invalid("crosses a non-object value"))?;
    object.insert((*last).to_string(), value);
    Ok(())
}
