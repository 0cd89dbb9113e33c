use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    dto::CreateReviewRequest, error::AppError, extract::JsonBody, services::ReviewService,
    state::AppState,
};

/// Review routes under `/api/reviews`, with and without a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reviews", get(list_reviews).post(create_review))
        .route("/api/reviews/", get(list_reviews).post(create_review))
        .route("/api/reviews/game/{game_id}", get(list_reviews_for_game))
        .route("/api/reviews/{id}", get(get_review).delete(delete_review))
}

async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::list_reviews(&state.db).await?;
    Ok(Json(reviews))
}

/// `GET /reviews/game/:game_id` — Reviews for one game; empty for an unknown game.
async fn list_reviews_for_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::list_reviews_for_game(&state.db, &game_id).await?;
    Ok(Json(reviews))
}

/// `POST /reviews` — Review an existing game.
async fn create_review(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::create_review(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::get_review_by_id(&state.db, &id).await?;
    Ok(Json(review))
}

async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let response = ReviewService::delete_review(&state.db, &id).await?;
    Ok(Json(response))
}
