use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use super::SortDirection;
use crate::entities::review;

/// Insert a new review document and return it as stored.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    doc: review::ActiveModel,
) -> Result<review::Model, DbErr> {
    doc.insert(conn).await
}

/// All reviews, sorted on `sort_key`.
pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    sort_key: review::Column,
    direction: SortDirection,
) -> Result<Vec<review::Model>, DbErr> {
    review::Entity::find()
        .order_by(sort_key, direction.into())
        .all(conn)
        .await
}

/// Reviews whose `game_id` matches, sorted on `sort_key`.
pub async fn find_by_game<C: ConnectionTrait>(
    conn: &C,
    game_id: &str,
    sort_key: review::Column,
    direction: SortDirection,
) -> Result<Vec<review::Model>, DbErr> {
    review::Entity::find()
        .filter(review::Column::GameId.eq(game_id))
        .order_by(sort_key, direction.into())
        .all(conn)
        .await
}

pub async fn find_one<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<review::Model>, DbErr> {
    review::Entity::find_by_id(id.to_owned()).one(conn).await
}

/// Remove the review with `id`, returning the document that was removed.
pub async fn find_one_and_delete<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<review::Model>, DbErr> {
    let Some(existing) = find_one(conn, id).await? else {
        return Ok(None);
    };

    let result = review::Entity::delete_by_id(id.to_owned()).exec(conn).await?;
    Ok((result.rows_affected > 0).then_some(existing))
}

/// Remove every review attached to `game_id`; returns how many were removed.
pub async fn delete_many<C: ConnectionTrait>(conn: &C, game_id: &str) -> Result<u64, DbErr> {
    let result = review::Entity::delete_many()
        .filter(review::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
