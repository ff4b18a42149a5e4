//! Card model: cells, the 5x5 grid and winning lines.
//!
//! - `Cell`: label + selected flag
//! - `Card`: 25 cells, free cell fixed at the centre
//! - `Line`: the 12 rows, columns and diagonals checked after each toggle

pub mod cell;
pub mod grid;
pub mod lines;

pub use cell::Cell;
pub use grid::{Card, ToggleOutcome, CARD_SIZE, FREE_INDEX, FREE_LABEL, GRID_WIDTH};
pub use lines::{completed_lines, evaluate_lines, CompletedLines, Line};
