mod common;

use sea_orm::ActiveValue::Set;

use gametracker_api::entities::{game, review};
use gametracker_api::services::cascade;
use gametracker_api::store;

fn game_doc(id: &str, title: &str) -> game::ActiveModel {
    game::ActiveModel {
        id: Set(id.to_string()),
        title: Set(title.to_string()),
        description: Set(String::new()),
        cover_image_url: Set(String::new()),
        status: Set("pending".to_string()),
        created_date: Set(chrono::Utc::now().fixed_offset()),
    }
}

fn review_doc(id: &str, game_id: &str) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(id.to_string()),
        game_id: Set(game_id.to_string()),
        rating: Set(4),
        review_text: Set(String::new()),
        created_date: Set(chrono::Utc::now().fixed_offset()),
    }
}

#[tokio::test]
async fn find_one_and_update_with_empty_patch_is_a_read() {
    let state = common::test_state().await;
    let inserted = store::games::insert(&state.db, game_doc("g1", "Rez")).await;
    assert!(inserted.is_ok(), "{inserted:?}");

    let found = store::games::find_one_and_update(&state.db, "g1", game::ActiveModel::default())
        .await
        .ok()
        .flatten();
    assert_eq!(found.map(|g| g.title), Some("Rez".to_string()));

    let missing =
        store::games::find_one_and_update(&state.db, "nope", game::ActiveModel::default()).await;
    assert!(matches!(missing, Ok(None)));
}

#[tokio::test]
async fn find_one_and_update_missing_document_returns_none() {
    let state = common::test_state().await;

    let patch = game::ActiveModel {
        status: Set("completed".to_string()),
        ..Default::default()
    };
    let result = store::games::find_one_and_update(&state.db, "nope", patch).await;

    assert!(matches!(result, Ok(None)), "{result:?}");
}

#[tokio::test]
async fn cascade_counts_only_matching_reviews() {
    let state = common::test_state().await;
    for (id, game_id) in [("r1", "a"), ("r2", "a"), ("r3", "b")] {
        let inserted = store::reviews::insert(&state.db, review_doc(id, game_id)).await;
        assert!(inserted.is_ok(), "{inserted:?}");
    }

    assert_eq!(cascade::delete_reviews_for_game(&state.db, "a").await.ok(), Some(2));
    assert_eq!(cascade::delete_reviews_for_game(&state.db, "a").await.ok(), Some(0));
    assert_eq!(cascade::delete_reviews_for_game(&state.db, "zzz").await.ok(), Some(0));

    let left = store::reviews::find_one(&state.db, "r3").await.ok().flatten();
    assert!(left.is_some());
}

#[tokio::test]
async fn find_one_and_delete_returns_removed_document() {
    let state = common::test_state().await;
    let inserted = store::games::insert(&state.db, game_doc("g2", "Ico")).await;
    assert!(inserted.is_ok(), "{inserted:?}");

    let removed = store::games::find_one_and_delete(&state.db, "g2").await.ok().flatten();
    assert_eq!(removed.map(|g| g.id), Some("g2".to_string()));

    let again = store::games::find_one_and_delete(&state.db, "g2").await;
    assert!(matches!(again, Ok(None)));
}
