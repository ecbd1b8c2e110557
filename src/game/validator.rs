use std::collections::HashMap;

use crate::dictionary::{normalize, Dictionary};
use crate::game::Scorer;
use crate::models::MoveResult;

/// Fewest letters a move may remove
pub const MIN_REMOVED: i32 = 1;
/// Most letters a move may remove
pub const MAX_REMOVED: i32 = 3;
/// A word of this length or shorter ends the game
pub const WIN_LENGTH: usize = 3;

/// Validate a proposed move from `current_word` to `next_word` and score it.
///
/// Both words are normalized before comparison. Checks run in order and
/// stop at the first failure: non-empty input, 1-3 letters removed, letters
/// drawn from the current word (as a multiset, order ignored), dictionary
/// membership. Rejection is always a `MoveResult` with a reason; this
/// function never fails on malformed input.
pub fn validate_move(current_word: &str, next_word: &str, dictionary: &Dictionary) -> MoveResult {
    let current = normalize(current_word);
    let next = normalize(next_word);

    if next.is_empty() {
        return MoveResult::rejected("Enter a word.");
    }

    let removed = current.chars().count() as i32 - next.chars().count() as i32;

    if !(MIN_REMOVED..=MAX_REMOVED).contains(&removed) {
        return MoveResult::rejected(format!(
            "Remove 1 to 3 letters (you removed {}).",
            removed
        ));
    }

    if !is_letter_subset(&current, &next) {
        return MoveResult::rejected("Letters are not drawn from the current word.");
    }

    if !dictionary.is_word(&next) {
        return MoveResult::rejected(format!("\"{}\" is not a valid word.", next));
    }

    MoveResult::accepted(
        Scorer::removal_points(removed),
        Scorer::reorder_bonus(&current, &next),
    )
}

/// Check if the game is won: the trimmed word has 3 letters or fewer.
///
/// Length-only by design; callers are expected to pass words that already
/// went through `validate_move`.
pub fn is_game_won(word: &str) -> bool {
    word.trim().chars().count() <= WIN_LENGTH
}

/// Check that every letter of `child`, counted with multiplicity, is
/// available in `parent`.
fn is_letter_subset(parent: &str, child: &str) -> bool {
    let mut freq: HashMap<char, u32> = HashMap::new();
    for c in parent.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    for c in child.chars() {
        match freq.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(["MATELAS", "METAL", "LAME", "AME", "ELEPHANT", "MATELA"])
    }

    #[test]
    fn test_valid_move_with_reordering() {
        let dict = test_dictionary();
        let result = validate_move("MATELAS", "METAL", &dict);
        assert_eq!(result, MoveResult::accepted(2, 2));
    }

    #[test]
    fn test_valid_move_without_reordering() {
        let dict = test_dictionary();
        let result = validate_move("LAME", "AME", &dict);
        assert_eq!(result, MoveResult::accepted(3, 0));
    }

    #[test]
    fn test_empty_next_word() {
        let dict = test_dictionary();
        let result = validate_move("MATELAS", "", &dict);
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some("Enter a word."));

        // A bare combining mark normalizes to nothing
        let result = validate_move("MATELAS", "\u{0301}", &dict);
        assert!(!result.valid);
    }

    #[test]
    fn test_next_word_longer_than_current() {
        let dict = test_dictionary();
        let result = validate_move("MATELAS", "MATELASSE", &dict);
        assert!(!result.valid);
        // The reported count is the actual (negative) difference
        assert!(result.reason.unwrap().contains("-2"));
    }

    #[test]
    fn test_removed_count_out_of_range() {
        let dict = test_dictionary();
        // Same length, zero removed
        assert!(!validate_move("METAL", "METAL", &dict).valid);
        // Five removed
        let result = validate_move("ELEPHANT", "AME", &dict);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains('5'));
    }

    #[test]
    fn test_letters_not_from_current_word() {
        let dict = test_dictionary();
        // LAMP needs a P that METAL does not have
        let result = validate_move("METAL", "LAMP", &dict);
        assert!(!result.valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("Letters are not drawn from the current word.")
        );
    }

    #[test]
    fn test_multiplicity_is_respected() {
        let dict = Dictionary::from_words(["METAL", "ELEME"]);
        // ELEME needs two E's; METAL only has one
        assert!(!validate_move("METAL", "ELEME", &dict).valid);
    }

    #[test]
    fn test_not_a_dictionary_word() {
        let dict = test_dictionary();
        let result = validate_move("MATELAS", "METALX", &dict);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("\"METALX\""));
    }

    #[test]
    fn test_subset_check_ignores_order() {
        let dict = Dictionary::from_words(["MATELAS", "METAL", "TEMAL", "ALMET"]);
        // Any permutation of the same letters passes the subset check
        assert!(validate_move("MATELAS", "METAL", &dict).valid);
        assert!(validate_move("MATELAS", "TEMAL", &dict).valid);
        assert!(validate_move("MATELAS", "ALMET", &dict).valid);
    }

    #[test]
    fn test_accented_input_is_normalized() {
        let dict = test_dictionary();
        let result = validate_move("MATELAS", "métal", &dict);
        assert_eq!(result, MoveResult::accepted(2, 2));
    }

    #[test]
    fn test_score_invariants() {
        let dict = test_dictionary();
        for (current, next) in [("MATELAS", "METAL"), ("LAME", "AME"), ("MATELAS", "MATELA")] {
            let result = validate_move(current, next, &dict);
            assert!(result.valid);
            let removed =
                current.chars().count() as i32 - next.chars().count() as i32;
            assert!((1..=3).contains(&result.points_p1));
            assert_eq!(result.points_p1 + removed, 4);
            assert!(result.points_p2 == 0 || result.points_p2 == 2);
        }
    }

    #[test]
    fn test_game_won_at_three_letters_or_fewer() {
        assert!(is_game_won("AME"));
        assert!(is_game_won("OR"));
        assert!(is_game_won(""));
        assert!(is_game_won("  AME  "));
        assert!(!is_game_won("METAL"));
        assert!(!is_game_won("LAME"));
    }
}
