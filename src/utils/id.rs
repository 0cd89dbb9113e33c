use uuid::Uuid;

/// Generate a fresh document identifier (random UUID v4, hyphenated lowercase).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
