//! Deck value types.

use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The user's decision on the current card.
///
/// The engine is agnostic to input modality: a drag gesture crossing its
/// distance threshold and a discrete button press both arrive here as the
/// same directional signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Direction {
    /// Swipe right: save the recipe.
    Accept,
    /// Swipe left: skip the recipe.
    Reject,
}

/// Lifecycle state of a deck session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeckStatus {
    /// Cards remain; `decide` advances the cursor.
    Active,
    /// The cursor has reached the end of the session queue.
    Finished,
}

/// The outcome of a non-ignored `decide` call, returned for transient UI
/// feedback (flash overlay, summary counters).
#[derive(Debug, Clone, PartialEq)]
pub struct Swipe {
    /// The recipe that was just decided.
    pub recipe: Recipe,
    /// The direction it was decided in.
    pub direction: Direction,
    /// The new cursor position.
    pub cursor: usize,
    /// Whether this decision finished the deck.
    pub finished: bool,
}

/// Running counters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCounts {
    /// Identifiers decided on in any session.
    pub seen: usize,
    /// Identifiers accepted (swiped right).
    pub favorited: usize,
    /// Seen but not favorited.
    pub skipped: usize,
    /// Cards left in the current session queue.
    pub remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Accept.to_string(), "Accept");
        assert_eq!(Direction::Reject.to_string(), "Reject");
    }
}
