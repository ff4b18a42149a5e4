//! Engine configuration.
//!
//! The presentation layer builds an `EngineConfig` once per session and
//! hands it to `GameState`. Nothing here is global.

use serde::{Deserialize, Serialize};

use crate::card::FREE_LABEL;

/// Configuration for a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Remove repeated terms from the pool before sampling.
    ///
    /// Off by default: a dynamic term that repeats a built-in one may then
    /// appear twice on the same card.
    pub dedup_terms: bool,

    /// Label shown on the free cell.
    pub free_label: String,

    /// Seed for card dealing. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dedup_terms: false,
            free_label: FREE_LABEL.to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicate the merged pool before sampling.
    #[must_use]
    pub fn with_dedup_terms(mut self, dedup: bool) -> Self {
        self.dedup_terms = dedup;
        self
    }

    /// Use a custom free-cell label.
    #[must_use]
    pub fn with_free_label(mut self, label: impl Into<String>) -> Self {
        self.free_label = label.into();
        self
    }

    /// Deal reproducible cards from this seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
