//! Card instances: a face placed at a board position.

use serde::{Deserialize, Serialize};

use super::face::CardFace;

/// Lifecycle of a placed card.
///
/// `Matched` is terminal: a matched card never returns to `Hidden` or
/// `Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down, revealable.
    #[default]
    Hidden,
    /// Face-up, awaiting resolution of the current turn.
    Revealed,
    /// Resolved as part of a pair; permanently out of play.
    Matched,
}

/// A placed card within one deck.
///
/// `position` is a stable engine-owned index for the lifetime of the deck,
/// deliberately decoupled from any rendering handle. Callers receive cards
/// as read-only views; state changes flow through the session's `reveal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Index of this card in the deck.
    pub position: usize,

    /// The (shape, color) identity used for match decisions.
    pub face: CardFace,

    /// Current lifecycle state.
    pub state: CardState,
}

impl Card {
    /// Create a hidden card at the given position.
    #[must_use]
    pub(crate) fn new(position: usize, face: CardFace) -> Self {
        Self {
            position,
            face,
            state: CardState::Hidden,
        }
    }

    /// Is this card face-down and revealable?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    /// Is this card face-up, awaiting the turn's resolution?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    /// Has this card been resolved as part of a pair?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
