//! Deterministic JSON serialization for exported collections.
//!
//! Ensures clean Git diffs by:
//! - Keeping field and map order exactly as built
//! - Using 2-space indentation
//! - Adding trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
