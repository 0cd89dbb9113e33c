use sea_orm::{ActiveValue::Set, DatabaseConnection, TransactionTrait};

use crate::dto::{normalize, CreateGameRequest, DeleteGameResponse, UpdateGameRequest};
use crate::entities::game;
use crate::error::AppError;
use crate::services::cascade;
use crate::store::{self, SortDirection};
use crate::utils::generate_id;

pub struct GameService;

impl GameService {
    /// Create a new game
    pub async fn create_game(
        db: &DatabaseConnection,
        request: CreateGameRequest,
    ) -> Result<game::Model, AppError> {
        let title = normalize::title(request.title.as_deref())?;
        let status = normalize::status_or_default(request.status.as_deref())?;

        let game = game::ActiveModel {
            id: Set(generate_id()),
            title: Set(title),
            description: Set(normalize::trimmed(request.description.as_deref())),
            cover_image_url: Set(normalize::trimmed(request.cover_image_url.as_deref())),
            status: Set(status.as_str().to_string()),
            created_date: Set(chrono::Utc::now().fixed_offset()),
        };

        let game = store::games::insert(db, game).await?;
        tracing::info!(game_id = %game.id, title = %game.title, "Game created");

        Ok(game)
    }

    /// All games, newest first
    pub async fn list_games(db: &DatabaseConnection) -> Result<Vec<game::Model>, AppError> {
        let games =
            store::games::find_all(db, game::Column::CreatedDate, SortDirection::Descending)
                .await?;
        Ok(games)
    }

    /// Get game by ID
    pub async fn get_game_by_id(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<game::Model, AppError> {
        store::games::find_one(db, id)
            .await?
            .ok_or_else(game_not_found)
    }

    /// Merge the fields present in `request` into the stored game.
    ///
    /// Text fields go through the same normalization as on create; absent fields are untouched.
    pub async fn update_game(
        db: &DatabaseConnection,
        id: &str,
        request: UpdateGameRequest,
    ) -> Result<game::Model, AppError> {
        let mut patch = game::ActiveModel::default();

        if let Some(title) = request.title.as_deref() {
            patch.title = Set(normalize::title(Some(title))?);
        }
        if let Some(description) = request.description.as_deref() {
            patch.description = Set(normalize::trimmed(Some(description)));
        }
        if let Some(cover) = request.cover_image_url.as_deref() {
            patch.cover_image_url = Set(normalize::trimmed(Some(cover)));
        }
        if let Some(status) = request.status.as_deref() {
            patch.status = Set(normalize::status(status)?.as_str().to_string());
        }

        let game = store::games::find_one_and_update(db, id, patch)
            .await?
            .ok_or_else(game_not_found)?;
        tracing::info!(game_id = %game.id, "Game updated");

        Ok(game)
    }

    /// Delete a game together with all of its reviews.
    ///
    /// Runs in a single transaction, reviews first, so a failure part-way leaves the
    /// game and its reviews in place.
    pub async fn delete_game(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<DeleteGameResponse, AppError> {
        let txn = db.begin().await?;

        if store::games::find_one(&txn, id).await?.is_none() {
            return Err(game_not_found());
        }

        let deleted_reviews = cascade::delete_reviews_for_game(&txn, id).await?;
        store::games::find_one_and_delete(&txn, id)
            .await?
            .ok_or_else(game_not_found)?;

        txn.commit().await?;
        tracing::info!(game_id = %id, deleted_reviews, "Game deleted");

        Ok(DeleteGameResponse {
            message: "Game deleted successfully".to_string(),
            deleted_reviews,
        })
    }
}

fn game_not_found() -> AppError {
    AppError::NotFound("Game not found".to_string())
}
