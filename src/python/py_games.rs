//! Game bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;

use crate::card::{ToggleOutcome, GRID_WIDTH};
use crate::core::EngineConfig;
use crate::game::GameState;
use crate::terms::TermPool;

use super::py_core::{to_py_err, PyCell, PyLine};

/// Python wrapper for GameState.
///
/// One bingo session: a dealt card plus its completed-line count.
#[pyclass(name = "BingoGame")]
pub struct PyBingoGame {
    state: GameState,
    pool: TermPool,
}

#[pymethods]
impl PyBingoGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible cards (None = random)
    /// - extra_terms: managed terms placed ahead of the built-in list
    /// - dedup_terms: drop repeated phrases before dealing
    #[new]
    #[pyo3(signature = (seed = None, extra_terms = Vec::new(), dedup_terms = false))]
    fn new(seed: Option<u64>, extra_terms: Vec<String>, dedup_terms: bool) -> PyResult<Self> {
        let pool = TermPool::merged(extra_terms);
        let mut config = EngineConfig::new().with_dedup_terms(dedup_terms);
        config.seed = seed;
        let state = GameState::new(&pool, config).map_err(to_py_err)?;
        Ok(Self { state, pool })
    }

    /// Toggle the cell at `index`. Returns True if the card changed.
    fn toggle(&mut self, index: usize) -> PyResult<bool> {
        let outcome = self.state.toggle(index).map_err(to_py_err)?;
        Ok(outcome != ToggleOutcome::FreeCell)
    }

    /// Deal a new card from the same pool.
    fn reset(&mut self) -> PyResult<()> {
        self.state.reset(&self.pool).map_err(to_py_err)
    }

    /// All 25 cells, row-major.
    #[getter]
    fn cells(&self) -> Vec<PyCell> {
        self.state.cells().iter().cloned().map(PyCell).collect()
    }

    /// Number of complete lines.
    #[getter]
    fn completed_lines(&self) -> usize {
        self.state.completed_lines()
    }

    /// The complete lines themselves.
    fn lines(&self) -> Vec<PyLine> {
        self.state.completed().into_iter().map(PyLine).collect()
    }

    /// Whether any line is complete.
    #[getter]
    fn has_bingo(&self) -> bool {
        self.state.has_bingo()
    }

    /// Selection state as a 5x5 numpy bool array.
    fn selection_mask<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let rows: Vec<Vec<bool>> = self
            .state
            .card()
            .rows()
            .map(|row| row.iter().map(|cell| cell.selected).collect())
            .collect();
        debug_assert_eq!(rows.len(), GRID_WIDTH);
        Ok(PyArray2::from_vec2_bound(py, &rows)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "BingoGame(completed_lines={}, selected={})",
            self.state.completed_lines(),
            self.state.card().selected_count()
        )
    }
}
