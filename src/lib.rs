//! # buzzword-bingo
//!
//! Card dealing and line detection for business-jargon bingo.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: Each session owns one `GameState`. No globals;
//!    the presentation layer keeps one instance per active game.
//!
//! 2. **Injectable Randomness**: Sampling only sees the `RandomSource`
//!    trait. Seeded `GameRng` for reproducible cards, scripted sources in
//!    tests.
//!
//! 3. **Pure Evaluation**: Line counting is a pure function of the 25
//!    selection bits and is recomputed after every toggle.
//!
//! ## Flow
//!
//! ```
//! use buzzword_bingo::{resolve_pool, EngineConfig, GameState, StaticTermSource};
//!
//! let pool = resolve_pool(&mut StaticTermSource::from_terms(["リスケ"]));
//! let mut game = GameState::new(&pool, EngineConfig::new().with_seed(7)).unwrap();
//! assert_eq!(game.completed_lines(), 0);
//!
//! for index in 0..5 {
//!     game.toggle(index).unwrap();
//! }
//! assert_eq!(game.completed_lines(), 1);
//!
//! game.reset(&pool).unwrap();
//! assert_eq!(game.completed_lines(), 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `sampler`: Fisher-Yates shuffle and card term sampling
//! - `card`: cells, the 5x5 card, winning lines
//! - `game`: per-session state and transitions
//! - `terms`: built-in phrases, pool merging, term sources
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod sampler;
pub mod card;
pub mod game;
pub mod terms;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BingoError, EngineConfig, GameRng, GameRngState, RandomSource, Result};

pub use crate::sampler::{sample_card_terms, shuffle, CARD_TERM_COUNT};

pub use crate::card::{
    completed_lines, evaluate_lines, Card, Cell, CompletedLines, Line, ToggleOutcome,
    CARD_SIZE, FREE_INDEX, FREE_LABEL, GRID_WIDTH,
};

pub use crate::game::{GameSnapshot, GameState};

pub use crate::terms::{
    resolve_pool, JsonTermSource, StaticTermSource, TermPool, TermRecord, TermSource,
    BUILTIN_TERMS,
};
