//! Card faces: the (shape, color) identity that decides a match.
//!
//! Two cards match exactly when their faces are equal, meaning both shape
//! and color agree. There are `4 x 8 = 32` distinct faces, which caps the
//! pair count a deck can be generated for.

use serde::{Deserialize, Serialize};

/// Shape drawn on a card's front side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Cross,
    Square,
    Fill,
}

impl Shape {
    /// All shape variants, in a fixed order.
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Cross, Shape::Square, Shape::Fill];
}

/// Color of the shape on a card's front side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Black,
    Gray,
    Brown,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// All color variants, in a fixed order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Black,
        Color::Gray,
        Color::Brown,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];
}

/// Number of distinct (shape, color) combinations.
pub const FACE_COUNT: usize = Shape::ALL.len() * Color::ALL.len();

/// A card's identity.
///
/// Immutable once placed; two `CardFace` values are equal iff both shape
/// and color match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub shape: Shape,
    pub color: Color,
}

impl CardFace {
    /// Create a face from a shape and a color.
    #[must_use]
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    /// Enumerate all [`FACE_COUNT`] distinct faces in a fixed order.
    pub fn all() -> impl Iterator<Item = CardFace> {
        Shape::ALL
            .iter()
            .flat_map(|&shape| Color::ALL.iter().map(move |&color| CardFace::new(shape, color)))
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?}", self.color, self.shape)
    }
}
