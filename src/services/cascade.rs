use sea_orm::{ConnectionTrait, DbErr};

use crate::store;

/// Remove every review that belongs to `game_id` and report how many went.
///
/// Called by game deletion inside the same transaction, before the game row itself is
/// removed. Zero is a normal result.
pub async fn delete_reviews_for_game<C: ConnectionTrait>(
    conn: &C,
    game_id: &str,
) -> Result<u64, DbErr> {
    let deleted = store::reviews::delete_many(conn, game_id).await?;
    tracing::debug!(game_id, deleted, "Removed reviews for game");
    Ok(deleted)
}
