mod games;
mod health;
mod reviews;

use axum::http::Uri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /`, `GET /api/` — service info
/// - `GET /api/health` — health check with database connectivity
/// - `/api/games` — game CRUD
/// - `/api/reviews` — review create/list/get/delete
///
/// Anything else, including a known path hit with the wrong method, falls through to a
/// JSON 404 that echoes the path.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(games::router())
        .merge(reviews::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
