//! Game session state: one card, its completed-line count, and the
//! initialize / toggle / reset transitions.

pub mod state;

pub use state::{GameSnapshot, GameState};
