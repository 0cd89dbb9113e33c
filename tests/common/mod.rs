#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use serde_json::Value;
use tower::ServiceExt;

use gametracker_api::config::{Config, Environment};
use gametracker_api::state::AppState;

/// Application state backed by an in-memory `SQLite` database with migrations applied.
pub async fn test_state() -> AppState {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();

    AppState {
        db,
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
        },
    }
}

pub fn app(state: AppState) -> Router {
    gametracker_api::routes::router().with_state(state)
}

pub async fn test_app() -> Router {
    app(test_state().await)
}

/// Send a request and return (status, parsed JSON body). A non-JSON body parses as `Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap_or_default();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

/// Create a game through the API and return its ID.
pub async fn create_game(app: &Router, title: &str) -> String {
    let (status, body) = post_json(app, "/api/games", &serde_json::json!({ "title": title })).await;
    assert_eq!(status, StatusCode::CREATED, "create game failed: {body}");
    body["id"].as_str().unwrap_or_default().to_string()
}

/// Create a review through the API and return its ID.
pub async fn create_review(app: &Router, game_id: &str, rating: i32) -> String {
    let (status, body) = post_json(
        app,
        "/api/reviews",
        &serde_json::json!({ "game_id": game_id, "rating": rating }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create review failed: {body}");
    body["id"].as_str().unwrap_or_default().to_string()
}
