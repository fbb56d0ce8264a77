//! Session configuration.
//!
//! Callers configure a game at startup by providing a `GameConfig`. The
//! engine never hardcodes board sizes; the pair count is configuration.

use serde::{Deserialize, Serialize};

/// Pair count used when none is specified (an 8-pair, 16-card board).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Configuration for a game session.
///
/// `seed: None` draws a seed from OS entropy; a fixed seed makes the deck
/// layout reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct face pairs; deck size is twice this value.
    pub pair_count: usize,

    /// Deck generation seed. `None` for OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given pair count.
    ///
    /// Validation happens at deck generation, not here.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            seed: None,
        }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set a fixed deck generation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
