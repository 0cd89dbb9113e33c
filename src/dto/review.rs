use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============ Request DTOs ============

/// POST /api/reviews - Create review request
#[derive(Debug, Default, Deserialize)]
pub struct CreateReviewRequest {
    pub game_id: Option<String>,
    /// Kept loose so numeric strings can be coerced; see [`super::normalize::rating`]
    pub rating: Option<JsonValue>,
    pub review_text: Option<String>,
}

// ============ Response DTOs ============

/// DELETE /api/reviews/:id response
#[derive(Debug, Serialize)]
pub struct DeleteReviewResponse {
    pub message: String,
}
