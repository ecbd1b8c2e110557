use thiserror::Error;

/// Errors raised by dictionary construction and sampling.
///
/// These are lifecycle/contract failures, not game-play conditions: move
/// rejection is always reported through `MoveResult`, never through errors.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Failed to read the word-list file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The word-list file is not a valid JSON array of strings.
    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    /// No word of start-word length (5-12 letters) exists in the source list.
    #[error("dictionary has no start words (5-12 letters)")]
    EmptyDictionary,
}
