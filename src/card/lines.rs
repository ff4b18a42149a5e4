//! Winning lines and line evaluation.
//!
//! A 5x5 card has 12 lines: 5 rows, 5 columns and 2 diagonals. A line is
//! complete when all 5 of its cells are selected. Lines are checked
//! independently, so a cell shared by several lines (the free cell sits on
//! one row, one column and both diagonals) counts toward each of them.
//!
//! Evaluation works on the card's 25-bit selection mask: a line is complete
//! iff `mask & line.mask() == line.mask()`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Card, GRID_WIDTH};

/// One of the 12 winning lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0..=4, top to bottom.
    Row(u8),
    /// Column 0..=4, left to right.
    Column(u8),
    /// Top-left to bottom-right: {0, 6, 12, 18, 24}.
    Diagonal,
    /// Top-right to bottom-left: {4, 8, 12, 16, 20}.
    AntiDiagonal,
}

/// Completed lines, inline for the full set of 12.
pub type CompletedLines = SmallVec<[Line; 12]>;

impl Line {
    /// Number of lines on a card.
    pub const COUNT: usize = 12;

    /// Every line, rows first, then columns, then diagonals.
    pub const ALL: [Line; Line::COUNT] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Row(4),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::Column(4),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Row-major cell indices on this line.
    #[must_use]
    pub const fn cells(self) -> [usize; GRID_WIDTH] {
        let mut cells = [0; GRID_WIDTH];
        let mut i = 0;
        while i < GRID_WIDTH {
            cells[i] = match self {
                Line::Row(row) => row as usize * GRID_WIDTH + i,
                Line::Column(col) => i * GRID_WIDTH + col as usize,
                Line::Diagonal => i * GRID_WIDTH + i,
                Line::AntiDiagonal => i * GRID_WIDTH + (GRID_WIDTH - 1 - i),
            };
            i += 1;
        }
        cells
    }

    /// Bit mask of this line's cells (bit `i` = cell `i`).
    #[must_use]
    pub const fn mask(self) -> u32 {
        let cells = self.cells();
        let mut mask = 0u32;
        let mut i = 0;
        while i < GRID_WIDTH {
            mask |= 1u32 << cells[i];
            i += 1;
        }
        mask
    }

    /// Check whether every cell of this line is set in `selection`.
    #[must_use]
    pub const fn is_complete_in(self, selection: u32) -> bool {
        let mask = self.mask();
        selection & mask == mask
    }

    /// Check whether this line is complete on `card`.
    #[must_use]
    pub fn is_complete(self, card: &Card) -> bool {
        self.is_complete_in(card.selection_mask())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "Row({})", row),
            Line::Column(col) => write!(f, "Column({})", col),
            Line::Diagonal => write!(f, "Diagonal"),
            Line::AntiDiagonal => write!(f, "AntiDiagonal"),
        }
    }
}

/// Count the complete lines on `card` (0..=12).
///
/// Pure: the same card state always gives the same count.
#[must_use]
pub fn evaluate_lines(card: &Card) -> usize {
    let selection = card.selection_mask();
    Line::ALL
        .iter()
        .filter(|line| line.is_complete_in(selection))
        .count()
}

/// List the complete lines on `card`, in [`Line::ALL`] order.
#[must_use]
pub fn completed_lines(card: &Card) -> CompletedLines {
    let selection = card.selection_mask();
    Line::ALL
        .iter()
        .copied()
        .filter(|line| line.is_complete_in(selection))
        .collect()
}
