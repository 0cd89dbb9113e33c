use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct InfoResponse {
    message: &'static str,
    version: &'static str,
    environment: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: DatabaseHealth,
}

#[derive(Serialize)]
struct DatabaseHealth {
    connected: bool,
    latency_ms: u128,
}

/// Health and info routes, mounted at the site and API roots.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info))
        .route("/api", get(info))
        .route("/api/", get(info))
        .route("/api/health", get(health_check))
}

/// `GET /`, `GET /api/` — liveness and build info
async fn info(State(state): State<AppState>) -> impl IntoResponse {
    Json(InfoResponse {
        message: "GameTracker API running",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.as_str(),
    })
}

/// `GET /api/health` — always 200; reports whether the store answers a ping
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let connected = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Database ping failed: {err}");
            false
        }
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            connected,
            latency_ms: started.elapsed().as_millis(),
        },
    };

    (StatusCode::OK, Json(response))
}
