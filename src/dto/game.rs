use serde::{Deserialize, Serialize};

// ============ Request DTOs ============

/// POST /api/games - Create game request
#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    /// `pending` when absent or blank
    pub status: Option<String>,
}

/// PUT /api/games/:id - Partial update request
///
/// Only these fields can change; anything else in the body (`id`, `created_date`, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGameRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub status: Option<String>,
}

// ============ Response DTOs ============

/// DELETE /api/games/:id response
#[derive(Debug, Serialize)]
pub struct DeleteGameResponse {
    pub message: String,
    #[serde(rename = "deletedReviews")]
    pub deleted_reviews: u64,
}
