//! # pairs-engine
//!
//! A pair-matching ("memory") card game engine: deck generation, reveal
//! tracking, and match/mismatch resolution. Rendering, input handling, and
//! animation are the caller's business; the engine exposes read-only card
//! views and reports an [`Outcome`] per reveal.
//!
//! ## Design Principles
//!
//! 1. **Explicit turn state**: the session owns a bounded pending-reveal
//!    set (at most two positions), mutated only through `reveal`. The
//!    two-card rule is an invariant, not an emergent property of callbacks.
//!
//! 2. **Engine-owned positions**: cards are addressed by stable integer
//!    positions, decoupled from any rendering handle.
//!
//! 3. **Deterministic when asked**: a seeded session reproduces its deck
//!    layout exactly; an unseeded one draws from OS entropy.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: faces, placed cards, deck generation
//! - `game`: session state machine and reveal outcomes
//!
//! ## Usage
//!
//! ```
//! use pairs_engine::{GameSession, Outcome};
//!
//! // A 1-pair deck holds two cards with the same face.
//! let mut session = GameSession::with_seed(1, 42).unwrap();
//!
//! assert_eq!(session.reveal(0).unwrap(), Outcome::Waiting);
//! assert_eq!(session.reveal(1).unwrap(), Outcome::Matched([0, 1]));
//! assert!(session.is_complete());
//! ```

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameResult, GameRng, GameRngState, DEFAULT_PAIR_COUNT,
};

pub use crate::cards::{Card, CardFace, CardState, Color, Deck, Shape, FACE_COUNT};

pub use crate::game::{GameSession, Outcome, SessionSnapshot};
