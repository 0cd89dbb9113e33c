//! Full lifecycle through the HTTP surface: create a game, review it, delete it.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn game_review_delete_lifecycle() {
    let app = common::test_app().await;

    let (status, game) =
        common::post_json(&app, "/api/games", &json!({ "title": "Chrono Trigger" })).await;
    assert_eq!(status, StatusCode::CREATED, "{game}");
    assert_eq!(game["status"], "pending");
    assert_eq!(game["description"], "");
    let game_id = game["id"].as_str().unwrap_or_default().to_string();

    let (status, review) =
        common::post_json(&app, "/api/reviews", &json!({ "game_id": game_id, "rating": 5 })).await;
    assert_eq!(status, StatusCode::CREATED, "{review}");

    let (status, reviews) = common::get(&app, &format!("/api/reviews/game/{game_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews.as_array().map(Vec::len), Some(1));

    let (status, deleted) = common::delete(&app, &format!("/api/games/{game_id}")).await;
    assert_eq!(status, StatusCode::OK, "{deleted}");
    assert_eq!(deleted["deletedReviews"], 1);

    let (status, _) = common::get(&app, &format!("/api/games/{game_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, reviews) = common::get(&app, &format!("/api/reviews/game/{game_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews, json!([]));
}
