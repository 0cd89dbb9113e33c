//! Field normalization shared by the create and update paths.

use serde_json::Value as JsonValue;

use crate::entities::GameStatus;
use crate::error::AppError;

/// Trim an optional text field, treating absence as the empty string.
pub fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// A title must be present and contain something other than whitespace.
pub fn title(value: Option<&str>) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(AppError::BadRequest("Title is required".to_string())),
    }
}

/// Parse a status string. Unknown values are rejected.
pub fn status(value: &str) -> Result<GameStatus, AppError> {
    GameStatus::from_str(value).ok_or_else(|| {
        AppError::BadRequest("Status must be one of: pending, completed".to_string())
    })
}

/// Status for a newly created game: absent or blank falls back to `pending`.
pub fn status_or_default(value: Option<&str>) -> Result<GameStatus, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(GameStatus::default()),
        Some(value) => status(value),
    }
}

/// Validate a rating and coerce it to an integer in `1..=5`.
///
/// Accepts JSON numbers and numeric strings; fractional values are truncated after the
/// range check, so `4.7` becomes `4` while `0.5` is rejected.
#[allow(clippy::cast_possible_truncation)]
pub fn rating(value: Option<&JsonValue>) -> Result<i32, AppError> {
    let number = match value {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if (1.0..=5.0).contains(&n) => Ok(n.trunc() as i32),
        _ => Err(AppError::BadRequest(
            "Rating is required and must be between 1 and 5".to_string(),
        )),
    }
}
