//! Game sessions: the reveal state machine.
//!
//! A `GameSession` exclusively owns one deck and the at-most-two pending
//! reveals of the current turn. Every card state change flows through
//! [`GameSession::reveal`]; resolution is synchronous, so the pending set
//! never exceeds two positions and the deck is never observable in an
//! inconsistent state.
//!
//! The engine reports each resolution but does not declare victory; callers
//! poll [`GameSession::is_complete`] when they want to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::Outcome;
use crate::cards::{Card, CardState, Deck};
use crate::core::{GameConfig, GameError, GameResult, GameRng, GameRngState};

/// One run of the game: a deck plus the current turn's pending reveals.
///
/// Created by `new`/`with_seed`/`from_config`; discarded or restarted
/// wholesale. No state carries over between sessions.
///
/// Single-threaded by design: `reveal` completes fully before returning and
/// the type is not internally synchronized, so concurrent callers must
/// serialize access themselves.
#[derive(Clone, Debug)]
pub struct GameSession {
    deck: Deck,
    /// Positions revealed this turn, in reveal order. Never longer than 2.
    pending: SmallVec<[usize; 2]>,
    pair_count: usize,
    rng: GameRng,
}

impl GameSession {
    /// Start a new game with an entropy-seeded deck.
    ///
    /// # Errors
    ///
    /// `InvalidPairCount` if `pair_count` is zero or exceeds the number of
    /// distinct faces.
    pub fn new(pair_count: usize) -> GameResult<Self> {
        Self::build(pair_count, GameRng::from_entropy())
    }

    /// Start a new game with a deterministic deck layout.
    pub fn with_seed(pair_count: usize, seed: u64) -> GameResult<Self> {
        Self::build(pair_count, GameRng::new(seed))
    }

    /// Start a new game from a configuration.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.pair_count, seed),
            None => Self::new(config.pair_count),
        }
    }

    fn build(pair_count: usize, mut rng: GameRng) -> GameResult<Self> {
        let deck = Deck::generate(pair_count, &mut rng)?;
        Ok(Self {
            deck,
            pending: SmallVec::new(),
            pair_count,
            rng,
        })
    }

    /// Reveal the card at `position` and resolve the turn if it is the
    /// second card.
    ///
    /// - Matched or already-pending cards: `Ok(Ignored)`, no state change.
    /// - First hidden card of a turn: `Ok(Waiting)`.
    /// - Second hidden card: both cards are compared and the turn resolves
    ///   immediately to `Matched` or `Mismatched`, with the two positions
    ///   reported in reveal order.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` does not address a card.
    pub fn reveal(&mut self, position: usize) -> GameResult<Outcome> {
        let card = self
            .deck
            .get(position)
            .ok_or(GameError::InvalidPosition {
                position,
                deck_len: self.deck.len(),
            })?;

        match card.state {
            // Resolved and pending cards cannot be re-revealed; a rapid
            // duplicate input must not corrupt the turn.
            CardState::Matched | CardState::Revealed => return Ok(Outcome::Ignored),
            CardState::Hidden => {}
        }

        self.deck.set_state(position, CardState::Revealed);
        self.pending.push(position);

        if self.pending.len() < 2 {
            return Ok(Outcome::Waiting);
        }

        let first = self.pending[0];
        let second = self.pending[1];
        self.pending.clear();

        if self.deck[first].face == self.deck[second].face {
            self.deck.set_state(first, CardState::Matched);
            self.deck.set_state(second, CardState::Matched);
            Ok(Outcome::Matched([first, second]))
        } else {
            // The caller owns any visual delay; the engine hides both
            // immediately.
            self.deck.set_state(first, CardState::Hidden);
            self.deck.set_state(second, CardState::Hidden);
            Ok(Outcome::Mismatched([first, second]))
        }
    }

    /// True iff every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.is_fully_matched()
    }

    /// Read-only view of the deck for rendering.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Read-only view of a single card.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.deck.get(position)
    }

    /// Positions revealed this turn, in reveal order (0, 1, or 2 entries).
    #[must_use]
    pub fn revealed_positions(&self) -> &[usize] {
        &self.pending
    }

    /// The pair count this session was created with.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of pairs resolved so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.deck.count_in_state(CardState::Matched) / 2
    }

    /// Discard the current deck and pending reveals and deal a fresh deck
    /// with the same pair count, continuing this session's random stream.
    pub fn restart(&mut self) -> GameResult<()> {
        self.deck = Deck::generate(self.pair_count, &mut self.rng)?;
        self.pending.clear();
        Ok(())
    }

    /// Restart with a fresh deterministic seed.
    pub fn restart_with_seed(&mut self, seed: u64) -> GameResult<()> {
        self.rng = GameRng::new(seed);
        self.restart()
    }

    /// Capture the full session state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            deck: self.deck.clone(),
            pending: self.pending.to_vec(),
            pair_count: self.pair_count,
            rng: self.rng.state(),
        }
    }

    /// Restore a session from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            deck: snapshot.deck,
            pending: SmallVec::from_vec(snapshot.pending),
            pair_count: snapshot.pair_count,
            rng: GameRng::from_state(&snapshot.rng),
        }
    }
}

/// Serializable capture of a [`GameSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Full deck, including card states.
    pub deck: Deck,
    /// Pending reveals of the current turn, in reveal order.
    pub pending: Vec<usize>,
    /// Pair count the session was created with.
    pub pair_count: usize,
    /// Random stream position, so a restored session restarts identically.
    pub rng: GameRngState,
}
