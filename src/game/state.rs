//! Per-session game state.
//!
//! ## GameState
//!
//! Owns exactly one card, the derived completed-line count, the session's
//! RNG and its configuration. The presentation layer keeps one instance per
//! active game; there is no shared or global state.
//!
//! Transitions:
//! - `new` / `reset`: deal a fresh card, count recomputed from scratch
//! - `toggle`: flip one non-free cell, count recomputed
//!
//! There is no terminal state. Toggling continues after any count.

use serde::{Deserialize, Serialize};

use crate::card::{completed_lines, evaluate_lines, Card, Cell, CompletedLines, ToggleOutcome};
use crate::core::{EngineConfig, GameRng, GameRngState, Result};
use crate::sampler::sample_card_terms;
use crate::terms::TermPool;

/// A single bingo session.
#[derive(Clone, Debug)]
pub struct GameState {
    card: Card,
    completed_lines: usize,
    rng: GameRng,
    config: EngineConfig,
}

impl GameState {
    /// Start a game: deal a card from `pool`.
    ///
    /// Uses `config.seed` when present, entropy otherwise.
    pub fn new(pool: &TermPool, config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(pool, config, rng)
    }

    /// Start a game with an explicit RNG.
    pub fn with_rng(pool: &TermPool, config: EngineConfig, mut rng: GameRng) -> Result<Self> {
        let card = deal_card(pool, &config, &mut rng)?;
        let completed_lines = evaluate_lines(&card);
        Ok(Self {
            card,
            completed_lines,
            rng,
            config,
        })
    }

    /// Flip the cell at `index` and recompute the line count.
    ///
    /// The free cell is a no-op. Out-of-range indices are rejected and
    /// leave the state untouched.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome> {
        let outcome = self.card.toggle(index)?;
        if !outcome.has_update() {
            return Ok(outcome);
        }

        let previous = self.completed_lines;
        self.completed_lines = evaluate_lines(&self.card);
        log::debug!("Toggled cell {} -> {:?}", index, outcome);
        if self.completed_lines != previous {
            log::info!(
                "Completed lines changed: {} -> {}",
                previous,
                self.completed_lines
            );
        }

        Ok(outcome)
    }

    /// Discard the current card and deal a new one from `pool`.
    ///
    /// On error the current game is kept as is, RNG included, so the next
    /// successful deal matches a session that never saw the failure.
    pub fn reset(&mut self, pool: &TermPool) -> Result<()> {
        let mut rng = self.rng.clone();
        let card = deal_card(pool, &self.config, &mut rng)?;
        self.rng = rng;
        self.completed_lines = evaluate_lines(&card);
        self.card = card;
        log::debug!("Game reset");
        Ok(())
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn cells(&self) -> &[Cell] {
        self.card.cells()
    }

    /// Number of complete lines on the current card.
    pub fn completed_lines(&self) -> usize {
        self.completed_lines
    }

    /// Which lines are complete, for highlighting.
    pub fn completed(&self) -> CompletedLines {
        completed_lines(&self.card)
    }

    /// At least one line is complete.
    pub fn has_bingo(&self) -> bool {
        self.completed_lines > 0
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Position of the session RNG, for checkpointing.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Current card and count, for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.card.cells().to_vec(),
            completed_lines: self.completed_lines,
        }
    }
}

/// What the presentation layer renders after every operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: Vec<Cell>,
    pub completed_lines: usize,
}

/// Each deal draws from its own fork of the session RNG.
fn deal_card(pool: &TermPool, config: &EngineConfig, session_rng: &mut GameRng) -> Result<Card> {
    let rng = &mut session_rng.fork();
    let terms = if config.dedup_terms {
        sample_card_terms(pool.deduplicated().terms(), rng)?
    } else {
        let duplicates = pool.duplicate_count();
        if duplicates > 0 {
            log::warn!(
                "Term pool has {} repeated entries, a card may show the same phrase twice",
                duplicates
            );
        }
        sample_card_terms(pool.terms(), rng)?
    };
    Card::deal(terms, &config.free_label)
}
