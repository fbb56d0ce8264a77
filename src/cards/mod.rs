//! Card system: faces, placed cards, and deck generation.
//!
//! ## Key Types
//!
//! - `Shape`, `Color`, `CardFace`: the identity that decides a match
//! - `Card`: a face placed at a stable position with a lifecycle state
//! - `Deck`: a shuffled, paired sequence of cards

pub mod card;
pub mod deck;
pub mod face;

pub use card::{Card, CardState};
pub use deck::Deck;
pub use face::{CardFace, Color, Shape, FACE_COUNT};
