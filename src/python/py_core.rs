//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::card::{Cell, Line};
use crate::core::BingoError;

/// Convert an engine error into the matching Python exception.
pub(crate) fn to_py_err(err: BingoError) -> PyErr {
    match err {
        BingoError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Cell.
#[pyclass(name = "Cell")]
#[derive(Clone, Debug)]
pub struct PyCell(pub Cell);

#[pymethods]
impl PyCell {
    /// Phrase printed on the square.
    #[getter]
    fn label(&self) -> String {
        self.0.label.clone()
    }

    /// Whether the square is marked.
    #[getter]
    fn selected(&self) -> bool {
        self.0.selected
    }

    fn __repr__(&self) -> String {
        format!("Cell(label={:?}, selected={})", self.0.label, self.0.selected)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Line.
#[pyclass(name = "Line")]
#[derive(Clone, Debug)]
pub struct PyLine(pub Line);

#[pymethods]
impl PyLine {
    /// Row-major cell indices on this line.
    fn cells(&self) -> Vec<usize> {
        self.0.cells().to_vec()
    }

    fn __repr__(&self) -> String {
        format!("Line.{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.mask() as u64
    }
}
