//! Game sessions and turn resolution.
//!
//! ## Key Types
//!
//! - `GameSession`: owns one deck and the current turn's pending reveals
//! - `Outcome`: what a single reveal did (ignored, waiting, matched,
//!   mismatched)
//! - `SessionSnapshot`: serializable capture of a session

pub mod outcome;
pub mod session;

pub use outcome::Outcome;
pub use session::{GameSession, SessionSnapshot};
