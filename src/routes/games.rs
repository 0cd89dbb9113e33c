use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    dto::{CreateGameRequest, UpdateGameRequest},
    error::AppError,
    extract::JsonBody,
    services::GameService,
    state::AppState,
};

/// Game routes under `/api/games`, with and without a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/", get(list_games).post(create_game))
        .route(
            "/api/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}

/// `GET /games` — All games, newest first.
async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::list_games(&state.db).await?;
    Ok(Json(games))
}

/// `POST /games` — Create a new game.
async fn create_game(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateGameRequest>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::create_game(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// `GET /games/:id` — Get a game by ID.
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::get_game_by_id(&state.db, &id).await?;
    Ok(Json(game))
}

/// `PUT /games/:id` — Partially update a game.
async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateGameRequest>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::update_game(&state.db, &id, req).await?;
    Ok(Json(game))
}

/// `DELETE /games/:id` — Delete a game and every review attached to it.
async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let response = GameService::delete_game(&state.db, &id).await?;
    Ok(Json(response))
}
