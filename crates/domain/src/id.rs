//! ID generation utilities.

use uuid::Uuid;

/// Generates a new random UUID v4 as a string.
///
/// Used for `info._postman_id`, which must differ on every build.
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id();
        // 8-4-4-4-12 = 36 chars
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.map(|u| u.get_version_num()).ok(), Some(4));
    }

    #[test]
    fn test_generate_id_uniqueness() {
        let id1 = generate_id();
        let id2 = generate_id();
        assert_ne!(id1, id2);
    }
}
