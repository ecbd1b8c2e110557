// Game engine modules

pub mod scorer;
pub mod validator;

pub use scorer::Scorer;
pub use validator::{is_game_won, validate_move};
