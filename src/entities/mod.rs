pub mod game;
pub mod game_status;
pub mod review;

pub use game_status::GameStatus;
