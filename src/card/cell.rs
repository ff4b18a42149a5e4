//! A single square on the card.

use serde::{Deserialize, Serialize};

/// One card square: the phrase shown and whether the player marked it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Phrase printed on the square.
    pub label: String,
    /// Marked by the player (always true for the free cell).
    pub selected: bool,
}

impl Cell {
    /// An unmarked cell.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
        }
    }

    /// The pre-marked centre cell.
    pub fn free(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: true,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.selected {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "{}", self.label)
        }
    }
}
