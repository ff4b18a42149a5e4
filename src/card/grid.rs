//! The 5x5 card.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::Cell;
use crate::core::{BingoError, Result};

/// Cells per row and per column.
pub const GRID_WIDTH: usize = 5;

/// Total cells on a card.
pub const CARD_SIZE: usize = GRID_WIDTH * GRID_WIDTH;

/// Row-major index of the free cell (the centre).
pub const FREE_INDEX: usize = 12;

/// Default label of the free cell.
pub const FREE_LABEL: &str = "FREE";

/// What a toggle did to the card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The free cell was targeted; nothing changed.
    FreeCell,
    /// The cell is now selected.
    Marked,
    /// The cell is now unselected.
    Unmarked,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::FreeCell => false,
            Self::Marked | Self::Unmarked => true,
        }
    }
}

/// A bingo card: exactly 25 cells in row-major order.
///
/// Index = row * 5 + col. The cell at [`FREE_INDEX`] is always selected
/// and never changes after the card is dealt. Only `deal` builds one, so
/// the card is serializable for display but not deserializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    cells: Vec<Cell>,
}

impl Card {
    /// Build a card from 25 sampled terms.
    ///
    /// The term at [`FREE_INDEX`] is discarded and replaced by the free cell.
    pub fn deal(terms: Vec<String>, free_label: &str) -> Result<Self> {
        if terms.len() != CARD_SIZE {
            return Err(BingoError::InvalidCardSize { len: terms.len() });
        }

        let mut cells: Vec<Cell> = terms.into_iter().map(Cell::new).collect();
        cells[FREE_INDEX] = Cell::free(free_label);

        log::debug!("Dealt card, free cell labelled {:?}", free_label);
        Ok(Self { cells })
    }

    /// Flip the selection of the cell at `index`.
    ///
    /// The free cell is a no-op; an index outside `0..25` is an error.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome> {
        let index = self.validate_index(index)?;

        if index == FREE_INDEX {
            return Ok(ToggleOutcome::FreeCell);
        }

        let cell = &mut self.cells[index];
        cell.selected = !cell.selected;
        Ok(if cell.selected {
            ToggleOutcome::Marked
        } else {
            ToggleOutcome::Unmarked
        })
    }

    pub fn validate_index(&self, index: usize) -> Result<usize> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(BingoError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
        }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < GRID_WIDTH && col < GRID_WIDTH {
            self.cells.get(row * GRID_WIDTH + col)
        } else {
            None
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|cell| cell.selected)
    }

    pub fn free_cell(&self) -> &Cell {
        &self.cells[FREE_INDEX]
    }

    /// Number of selected cells, free cell included.
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.selected).count()
    }

    /// Selection state packed into the low 25 bits (bit `i` = cell `i`).
    pub fn selection_mask(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.selected)
            .fold(0, |mask, (i, _)| mask | (1u32 << i))
    }

    /// Iterate over the rows of the card.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_WIDTH)
    }
}

impl Index<usize> for Card {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let labels: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", labels.join(" | "))?;
        }
        Ok(())
    }
}
