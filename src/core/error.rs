//! Errors raised while dealing cards, toggling cells and loading terms.

use thiserror::Error;

/// Everything the engine can fail with.
#[derive(Error, Debug)]
pub enum BingoError {
    /// The pool (after any deduplication) is shorter than one card.
    #[error("Not enough terms to fill a card: {available} available, {required} required")]
    InsufficientTerms { available: usize, required: usize },
    /// A toggle targeted a cell outside `0..len`. The card is unchanged.
    #[error("Cell index {index} out of range for a card of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
    /// `Card::deal` was handed a term list that is not exactly 25 long.
    #[error("Card requires 25 terms, got {len}")]
    InvalidCardSize { len: usize },
    /// The term inventory could not be reached or reported an error.
    #[error("Term source unavailable: {0}")]
    SourceUnavailable(String),
    /// The term inventory answered with JSON of the wrong shape.
    #[error("Malformed term payload")]
    MalformedTerms(#[from] serde_json::Error),
}

impl BingoError {
    /// True for [`BingoError::InsufficientTerms`], the one failure a caller
    /// can fix by supplying more terms.
    pub const fn is_insufficient_terms(&self) -> bool {
        matches!(self, Self::InsufficientTerms { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BingoError>;
