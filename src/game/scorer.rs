pub struct Scorer;

impl Scorer {
    /// Points for the number of letters removed this move.
    ///
    /// Scoring rules (WordCut):
    /// - Removing 1 letter scores 3 points
    /// - Removing 2 letters scores 2 points
    /// - Removing 3 letters scores 1 point
    ///
    /// Smaller cuts keep the game alive longer, so they pay more.
    /// `removed` must already be validated to lie in 1..=3.
    pub fn removal_points(removed: i32) -> i32 {
        4 - removed
    }

    /// Bonus for rearranging the remaining letters.
    ///
    /// +2 when `next` cannot be read out of `current` in order, i.e. the
    /// player permuted the letters instead of deleting in place. Plain
    /// deletion (subsequence relation holds) earns nothing.
    pub fn reorder_bonus(current: &str, next: &str) -> i32 {
        if Self::is_subsequence(next, current) {
            0
        } else {
            2
        }
    }

    /// Check if `sub` appears in `text` in order (not necessarily
    /// contiguously), by a single greedy left-to-right scan.
    pub fn is_subsequence(sub: &str, text: &str) -> bool {
        let mut remaining = sub.chars().peekable();
        for c in text.chars() {
            if remaining.peek() == Some(&c) {
                remaining.next();
            }
        }
        remaining.peek().is_none()
    }
}
