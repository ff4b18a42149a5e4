//! Core engine types: randomness, configuration, errors.
//!
//! These are shared by the sampler, the card model and the game state.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::EngineConfig;
pub use error::{BingoError, Result};
