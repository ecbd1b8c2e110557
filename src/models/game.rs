use serde::{Deserialize, Serialize};

/// Outcome of validating a single proposed move.
///
/// Rejection is a normal return value: `valid` is false and `reason` holds
/// a human-readable message for the player. Accepted moves carry the two
/// point components and no reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub valid: bool,
    pub points_p1: i32,
    pub points_p2: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MoveResult {
    /// An accepted move with its removal points and reorder bonus.
    pub fn accepted(points_p1: i32, points_p2: i32) -> Self {
        Self {
            valid: true,
            points_p1,
            points_p2,
            reason: None,
        }
    }

    /// A rejected move scoring nothing.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            points_p1: 0,
            points_p2: 0,
            reason: Some(reason.into()),
        }
    }
}

/// A move accepted into a game's history: the resulting word and the
/// points it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    pub word: String,
    pub points_p1: i32,
    pub points_p2: i32,
}
