use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use super::SortDirection;
use crate::entities::game;

/// Insert a new game document and return it as stored.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    doc: game::ActiveModel,
) -> Result<game::Model, DbErr> {
    doc.insert(conn).await
}

/// All games, sorted on `sort_key`.
pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    sort_key: game::Column,
    direction: SortDirection,
) -> Result<Vec<game::Model>, DbErr> {
    game::Entity::find()
        .order_by(sort_key, direction.into())
        .all(conn)
        .await
}

pub async fn find_one<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<game::Model>, DbErr> {
    game::Entity::find_by_id(id.to_owned()).one(conn).await
}

/// Apply the `Set` fields of `patch` to the game with `id`.
///
/// Returns `None` when no game matches. A patch without any `Set` field is a read.
pub async fn find_one_and_update<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    mut patch: game::ActiveModel,
) -> Result<Option<game::Model>, DbErr> {
    if !patch.is_changed() {
        return find_one(conn, id).await;
    }

    patch.id = ActiveValue::Unchanged(id.to_owned());
    match patch.update(conn).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Remove the game with `id`, returning the document that was removed.
pub async fn find_one_and_delete<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<game::Model>, DbErr> {
    let Some(existing) = find_one(conn, id).await? else {
        return Ok(None);
    };

    let result = game::Entity::delete_by_id(id.to_owned()).exec(conn).await?;
    Ok((result.rows_affected > 0).then_some(existing))
}
