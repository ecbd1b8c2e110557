//! # wordcut-engine
//!
//! Core of the WordCut word-reduction game: starting from a dictionary
//! word, the player removes 1-3 letters per move, and the remaining
//! letters (in any order) must form another dictionary word, until a word
//! of 3 letters or fewer is reached.
//!
//! The dictionary owns the normalized word set and answers lookups in
//! O(1); the game engine is pure functions over it; `GameSession` is the
//! single mutable-state holder an embedding UI drives.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod session;

// Re-export the main types for convenience
pub use dictionary::{normalize, Dictionary};
pub use error::DictionaryError;
pub use game::{is_game_won, validate_move, Scorer};
pub use models::{GameMove, MoveResult};
pub use session::GameSession;
