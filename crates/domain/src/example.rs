//! Helpers for documented example values.
//!
//! Examples arrive as arbitrary JSON. Query strings, path variables and
//! form fields need them as flat strings.

use serde_json::Value as JsonValue;

/// Returns true if an example carries no value.
///
/// Null, `""`, `[]` and `{}` are empty. `0`, `false` and `"0"` are not.
#[must_use]
pub fn is_empty_example(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(fields) => fields.is_empty(),
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}

/// Flattens an example into the string a client would send.
///
/// Strings are used verbatim, booleans become `1`/`0`, null becomes empty
/// and nested structures are written as compact JSON.
#[must_use]
pub fn example_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Array(_) | JsonValue::Object(_) => value.to_string(),
    }
}
