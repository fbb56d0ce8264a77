//! Deck generation: a shuffled, paired sequence of cards.
//!
//! ## Invariants
//!
//! - Deck length is exactly `2 * pair_count`.
//! - Every face present appears on exactly two positions.
//! - Positions are `0..len`, assigned after the full sequence is shuffled,
//!   so selection order carries no pairing information.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardState};
use super::face::{CardFace, FACE_COUNT};
use crate::core::{GameError, GameResult, GameRng};

/// An ordered sequence of cards, two per chosen face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate a shuffled deck of `pair_count` face pairs.
    ///
    /// Faces are chosen without repetition by shuffling the full 32-face
    /// enumeration and taking a prefix, so no combination can be drawn
    /// twice. The doubled sequence then gets its own uniform shuffle before
    /// positions are assigned.
    ///
    /// # Errors
    ///
    /// `InvalidPairCount` if `pair_count` is zero or exceeds [`FACE_COUNT`].
    pub fn generate(pair_count: usize, rng: &mut GameRng) -> GameResult<Self> {
        if pair_count == 0 || pair_count > FACE_COUNT {
            return Err(GameError::InvalidPairCount {
                requested: pair_count,
            });
        }

        let mut faces: Vec<CardFace> = CardFace::all().collect();
        rng.shuffle(&mut faces);
        faces.truncate(pair_count);

        let mut doubled: Vec<CardFace> = Vec::with_capacity(pair_count * 2);
        for &face in &faces {
            doubled.push(face);
            doubled.push(face);
        }
        rng.shuffle(&mut doubled);

        let cards = doubled
            .into_iter()
            .enumerate()
            .map(|(position, face)| Card::new(position, face))
            .collect();

        Ok(Self { cards })
    }

    /// Number of cards (always twice the pair count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck holds no cards. Generated decks never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over all cards in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// True iff every card has been matched.
    #[must_use]
    pub fn is_fully_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of cards currently in the given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }

    /// Set a card's state. Out-of-range positions are ignored; callers
    /// validate positions before mutating.
    pub(crate) fn set_state(&mut self, position: usize, state: CardState) {
        if let Some(card) = self.cards.get_mut(position) {
            card.state = state;
        }
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = Card;

    fn index(&self, position: usize) -> &Card {
        &self.cards[position]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_generate_rejects_zero_pairs() {
        let mut rng = GameRng::new(42);
        assert_eq!(
            Deck::generate(0, &mut rng),
            Err(GameError::InvalidPairCount { requested: 0 })
        );
    }

    #[test]
    fn test_generate_rejects_too_many_pairs() {
        let mut rng = GameRng::new(42);
        assert_eq!(
            Deck::generate(FACE_COUNT + 1, &mut rng),
            Err(GameError::InvalidPairCount { requested: 33 })
        );
    }

    #[test]
    fn test_generate_full_deck_uses_every_face() {
        let mut rng = GameRng::new(42);
        let deck = Deck::generate(FACE_COUNT, &mut rng).unwrap();

        assert_eq!(deck.len(), FACE_COUNT * 2);

        let mut counts: FxHashMap<CardFace, usize> = FxHashMap::default();
        for card in &deck {
            *counts.entry(card.face).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), FACE_COUNT);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_positions_are_sequential() {
        let mut rng = GameRng::new(7);
        let deck = Deck::generate(5, &mut rng).unwrap();

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn test_all_cards_start_hidden() {
        let mut rng = GameRng::new(7);
        let deck = Deck::generate(8, &mut rng).unwrap();

        assert_eq!(deck.count_in_state(CardState::Hidden), 16);
        assert!(!deck.is_fully_matched());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let mut rng1 = GameRng::new(123);
        let mut rng2 = GameRng::new(123);

        let deck1 = Deck::generate(10, &mut rng1).unwrap();
        let deck2 = Deck::generate(10, &mut rng2).unwrap();

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let deck1 = Deck::generate(10, &mut rng1).unwrap();
        let deck2 = Deck::generate(10, &mut rng2).unwrap();

        // 20-card decks from different seeds colliding is astronomically
        // unlikely.
        assert_ne!(deck1, deck2);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut rng = GameRng::new(42);
        let deck = Deck::generate(2, &mut rng).unwrap();

        assert!(deck.get(3).is_some());
        assert!(deck.get(4).is_none());
    }
}
