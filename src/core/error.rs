//! Engine errors.
//!
//! Both variants are deterministic input errors: they are reported
//! synchronously, never retried internally, and always caller-recoverable
//! (ignore the failed call and try a different input). Duplicate reveals
//! are *not* errors; they resolve to [`Outcome::Ignored`].
//!
//! [`Outcome::Ignored`]: crate::game::Outcome::Ignored

use std::fmt;

use crate::cards::FACE_COUNT;

/// Errors reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Deck generation asked for zero pairs or more pairs than there are
    /// distinct faces.
    InvalidPairCount { requested: usize },
    /// A reveal addressed a position outside the current deck.
    InvalidPosition { position: usize, deck_len: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPairCount { requested } => {
                write!(
                    f,
                    "invalid pair count {}: must be between 1 and {}",
                    requested, FACE_COUNT
                )
            }
            GameError::InvalidPosition { position, deck_len } => {
                write!(
                    f,
                    "invalid position {}: deck has {} cards",
                    position, deck_len
                )
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias for engine results.
pub type GameResult<T> = Result<T, GameError>;
