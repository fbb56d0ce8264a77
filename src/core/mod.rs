//! Core engine types: RNG, configuration, errors.
//!
//! These are the building blocks the rest of the engine is assembled from;
//! nothing here knows about cards or turns.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_PAIR_COUNT};
pub use error::{GameError, GameResult};
pub use rng::{GameRng, GameRngState};
