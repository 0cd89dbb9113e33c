pub mod game;
pub mod normalize;
pub mod review;

pub use game::{CreateGameRequest, DeleteGameResponse, UpdateGameRequest};
pub use review::{CreateReviewRequest, DeleteReviewResponse};
