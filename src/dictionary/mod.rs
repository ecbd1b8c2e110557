use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use crate::error::DictionaryError;

/// Minimum length of a word eligible to start a game
pub const START_WORD_MIN_LEN: usize = 5;
/// Maximum length of a word eligible to start a game
pub const START_WORD_MAX_LEN: usize = 12;

/// Canonicalize a word: uppercase, then NFD decomposition with combining
/// marks (U+0300..U+036F) stripped. "ÉLÉPHANT" becomes "ELEPHANT".
///
/// Used both when building the word set and on every lookup, so player
/// input and stored entries always compare in the same form. Idempotent.
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// The normalized word set plus the pool of eligible start words.
///
/// Immutable once constructed: every constructor returns a fully built
/// dictionary, so queries can never observe an unloaded state.
pub struct Dictionary {
    words: HashSet<String>,
    start_words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from an in-memory sequence of raw words.
    ///
    /// Each entry is trimmed and normalized; empty entries are skipped.
    /// Start words are the distinct entries of normalized length 5 to 12.
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = raw
            .into_iter()
            .map(|w| normalize(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();

        let start_words: Vec<String> = words
            .iter()
            .filter(|w| {
                let len = w.chars().count();
                (START_WORD_MIN_LEN..=START_WORD_MAX_LEN).contains(&len)
            })
            .cloned()
            .collect();

        Self { words, start_words }
    }

    /// Load a dictionary from a word-list file.
    ///
    /// A `.json` file is parsed as a JSON array of strings; anything else
    /// is read as one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let dict = if path.extension().is_some_and(|ext| ext == "json") {
            let raw: Vec<String> = serde_json::from_str(&content)?;
            Self::from_words(raw)
        } else {
            Self::from_words(content.lines())
        };

        tracing::info!(
            "Loaded {} words into dictionary ({} start words)",
            dict.len(),
            dict.start_words.len()
        );

        Ok(dict)
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
            start_words: Vec::new(),
        }
    }

    /// Check if a word exists in the dictionary. Input is normalized first.
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Pick a uniformly random start word (5 to 12 letters).
    ///
    /// The randomness source is injected so callers can seed it.
    pub fn random_start_word<R: Rng>(&self, rng: &mut R) -> Result<&str, DictionaryError> {
        if self.start_words.is_empty() {
            return Err(DictionaryError::EmptyDictionary);
        }
        let idx = rng.random_range(0..self.start_words.len());
        Ok(&self.start_words[idx])
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words eligible to start a game
    pub fn start_word_count(&self) -> usize {
        self.start_words.len()
    }
}
