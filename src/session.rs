use std::sync::Arc;

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::DictionaryError;
use crate::game::{is_game_won, validate_move};
use crate::models::{GameMove, MoveResult};

/// Mutable state of one game: current word, move history, score.
///
/// The dictionary and engine stay pure; this is the only state holder.
/// All mutation goes through `&mut self`, so applying a move and reading
/// the updated state cannot interleave.
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    start_word: String,
    current_word: String,
    history: Vec<GameMove>,
    total_score: i32,
    is_won: bool,
    last_error: Option<String>,
}

impl GameSession {
    /// Create an idle session. No game is running until `new_game`.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            start_word: String::new(),
            current_word: String::new(),
            history: Vec::new(),
            total_score: 0,
            is_won: false,
            last_error: None,
        }
    }

    /// Start a new game from a random start word.
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) -> Result<(), DictionaryError> {
        let word = self.dictionary.random_start_word(rng)?.to_string();
        self.start_word = word.clone();
        self.current_word = word;
        self.history.clear();
        self.total_score = 0;
        self.is_won = false;
        self.last_error = None;
        Ok(())
    }

    /// Restart the current game with the same start word.
    pub fn reset_game(&mut self) {
        self.current_word = self.start_word.clone();
        self.history.clear();
        self.total_score = 0;
        self.is_won = false;
        self.last_error = None;
    }

    /// Submit a move and apply it if valid.
    ///
    /// Invalid moves only record `last_error`; word, history and score are
    /// left untouched. The stored word keeps the player's own spelling
    /// (trimmed, uppercased), not the normalized form.
    pub fn submit_move(&mut self, next_word: &str) -> MoveResult {
        let result = validate_move(&self.current_word, next_word, &self.dictionary);

        if !result.valid {
            self.last_error = Some(
                result
                    .reason
                    .clone()
                    .unwrap_or_else(|| "Invalid move.".to_string()),
            );
            return result;
        }

        let new_word = next_word.trim().to_uppercase();
        self.current_word = new_word.clone();
        self.total_score += result.points_p1 + result.points_p2;
        self.is_won = is_game_won(&new_word);
        self.history.push(GameMove {
            word: new_word,
            points_p1: result.points_p1,
            points_p2: result.points_p2,
        });
        self.last_error = None;

        result
    }

    /// The word this game started from
    pub fn start_word(&self) -> &str {
        &self.start_word
    }

    /// The word the player must reduce next
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Accepted moves, oldest first
    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    /// Sum of both point components over all accepted moves
    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// True once a word of 3 letters or fewer has been reached
    pub fn is_won(&self) -> bool {
        self.is_won
    }

    /// Reason of the most recent rejected move, cleared by the next valid one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
