//! Python bindings for the bingo engine.
//!
//! # Quick Start
//!
//! ```python
//! import buzzword_bingo as bingo
//!
//! game = bingo.BingoGame(seed=42, extra_terms=["リスケ"])
//!
//! for i in range(5):
//!     game.toggle(i)
//!
//! assert game.completed_lines == 1
//! mask = game.selection_mask()  # numpy (5, 5) bool
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// buzzword_bingo: card dealing and line detection for business-jargon bingo.
#[pymodule]
fn buzzword_bingo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCell>()?;
    m.add_class::<PyLine>()?;
    m.add_class::<PyBingoGame>()?;

    Ok(())
}
