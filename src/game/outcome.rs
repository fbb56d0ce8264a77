//! Reveal outcomes reported to the caller.

use serde::{Deserialize, Serialize};

/// Result of a single reveal.
///
/// `Matched` and `Mismatched` carry the two positions in reveal order
/// (first-revealed, then second-revealed), never numeric order, so callers
/// that care about turn semantics can rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The reveal targeted an already-matched or already-pending card;
    /// nothing changed.
    Ignored,
    /// First card of the turn is face-up; waiting for the second.
    Waiting,
    /// The two revealed faces were equal; both cards are permanently out
    /// of play.
    Matched([usize; 2]),
    /// The two revealed faces differed; both cards are hidden again.
    Mismatched([usize; 2]),
}

impl Outcome {
    /// True if this outcome ended a turn (two cards were compared).
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, Outcome::Matched(_) | Outcome::Mismatched(_))
    }

    /// The positions involved in a resolution, in reveal order.
    #[must_use]
    pub fn positions(&self) -> Option<[usize; 2]> {
        match self {
            Outcome::Matched(positions) | Outcome::Mismatched(positions) => Some(*positions),
            Outcome::Ignored | Outcome::Waiting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_resolution() {
        assert!(!Outcome::Ignored.is_resolution());
        assert!(!Outcome::Waiting.is_resolution());
        assert!(Outcome::Matched([0, 1]).is_resolution());
        assert!(Outcome::Mismatched([2, 0]).is_resolution());
    }

    #[test]
    fn test_positions() {
        assert_eq!(Outcome::Waiting.positions(), None);
        assert_eq!(Outcome::Matched([3, 1]).positions(), Some([3, 1]));
        assert_eq!(Outcome::Mismatched([1, 3]).positions(), Some([1, 3]));
    }
}
