pub mod error_code;
pub mod game;

pub use error_code::ErrorCode;
pub use game::GameError;
