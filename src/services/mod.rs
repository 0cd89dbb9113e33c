pub mod cascade;
pub mod game_service;
pub mod review_service;

pub use game_service::GameService;
pub use review_service::ReviewService;
