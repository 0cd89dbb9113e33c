use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::dto::{normalize, CreateReviewRequest, DeleteReviewResponse};
use crate::entities::review;
use crate::error::AppError;
use crate::store::{self, SortDirection};
use crate::utils::generate_id;

pub struct ReviewService;

impl ReviewService {
    /// Create a review for an existing game
    pub async fn create_review(
        db: &DatabaseConnection,
        request: CreateReviewRequest,
    ) -> Result<review::Model, AppError> {
        let game_id = request
            .game_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("game_id is required".to_string()))?
            .to_string();

        let rating = normalize::rating(request.rating.as_ref())?;

        if store::games::find_one(db, &game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let review = review::ActiveModel {
            id: Set(generate_id()),
            game_id: Set(game_id),
            rating: Set(rating),
            review_text: Set(normalize::trimmed(request.review_text.as_deref())),
            created_date: Set(chrono::Utc::now().fixed_offset()),
        };

        let review = store::reviews::insert(db, review).await?;
        tracing::info!(
            review_id = %review.id,
            game_id = %review.game_id,
            rating = review.rating,
            "Review created"
        );

        Ok(review)
    }

    /// All reviews, newest first
    pub async fn list_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>, AppError> {
        let reviews =
            store::reviews::find_all(db, review::Column::CreatedDate, SortDirection::Descending)
                .await?;
        Ok(reviews)
    }

    /// Reviews for one game, newest first. An unknown game simply has none.
    pub async fn list_reviews_for_game(
        db: &DatabaseConnection,
        game_id: &str,
    ) -> Result<Vec<review::Model>, AppError> {
        let reviews = store::reviews::find_by_game(
            db,
            game_id,
            review::Column::CreatedDate,
            SortDirection::Descending,
        )
        .await?;
        Ok(reviews)
    }

    pub async fn get_review_by_id(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<review::Model, AppError> {
        store::reviews::find_one(db, id)
            .await?
            .ok_or_else(review_not_found)
    }

    pub async fn delete_review(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<DeleteReviewResponse, AppError> {
        let review = store::reviews::find_one_and_delete(db, id)
            .await?
            .ok_or_else(review_not_found)?;
        tracing::info!(review_id = %review.id, game_id = %review.game_id, "Review deleted");

        Ok(DeleteReviewResponse {
            message: "Review deleted successfully".to_string(),
        })
    }
}

fn review_not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}
