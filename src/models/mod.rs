pub mod game;

pub use game::{GameMove, MoveResult};
