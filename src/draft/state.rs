//! The two-sided draft as an immutable decision process.
//!
//! Both partial decks are persistent vectors, so `apply` shares structure
//! with the parent state instead of copying it.

use im::Vector;
use thiserror::Error;

use crate::cards::{Card, DECK_SIZE};
use crate::core::Player;
use crate::rules::State;

/// A partial deck the caller handed in is not a valid draft position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("deck already holds {len} cards, no pick left to make")]
    DeckFull { len: usize },

    #[error("{0} appears twice in the same deck")]
    DuplicateCard(Card),

    #[error("generation size must be at least 1")]
    EmptyGeneration,

    #[error("{player} cards to move against {opponent} cannot reach two full decks by alternating picks")]
    OutOfTurn { player: usize, opponent: usize },
}

/// Check a partial deck: at most `max_len` cards, no card twice.
pub fn validate_deck(deck: &[Card], max_len: usize) -> Result<(), DraftError> {
    if deck.len() > max_len {
        return Err(DraftError::DeckFull { len: deck.len() });
    }
    for (i, card) in deck.iter().enumerate() {
        if deck[..i].contains(card) {
            return Err(DraftError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// A draft position: whose pick it is and both partial decks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraftState {
    current_agent: Player,
    current_deck: Vector<Card>,
    next_deck: Vector<Card>,
}

impl DraftState {
    /// Position where `current_agent` picks next.
    ///
    /// Fails if either deck has more than six cards or repeats a card, or
    /// if alternating picks from here cannot fill both decks: the mover
    /// must hold as many cards as the other side or one fewer.
    pub fn new(
        current_agent: Player,
        current_deck: &[Card],
        next_deck: &[Card],
    ) -> Result<Self, DraftError> {
        validate_deck(current_deck, DECK_SIZE)?;
        validate_deck(next_deck, DECK_SIZE)?;
        if current_deck.len() != next_deck.len() && current_deck.len() + 1 != next_deck.len() {
            return Err(DraftError::OutOfTurn {
                player: current_deck.len(),
                opponent: next_deck.len(),
            });
        }
        Ok(Self {
            current_agent,
            current_deck: current_deck.iter().copied().collect(),
            next_deck: next_deck.iter().copied().collect(),
        })
    }

    /// The empty draft, player 1 to pick.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            current_agent: Player::Player1,
            current_deck: Vector::new(),
            next_deck: Vector::new(),
        }
    }

    /// Partial deck of the agent to move.
    #[must_use]
    pub fn current_deck(&self) -> &Vector<Card> {
        &self.current_deck
    }

    /// Partial deck of the other agent.
    #[must_use]
    pub fn next_deck(&self) -> &Vector<Card> {
        &self.next_deck
    }

    /// `(own, opposing)` decks from `agent`'s point of view.
    #[must_use]
    pub fn decks_for(&self, agent: Player) -> (&Vector<Card>, &Vector<Card>) {
        if agent == self.current_agent {
            (&self.current_deck, &self.next_deck)
        } else {
            (&self.next_deck, &self.current_deck)
        }
    }
}

impl State for DraftState {
    type Agent = Player;
    type Move = Card;

    fn current_agent(&self) -> Player {
        self.current_agent
    }

    /// Cards not yet in the mover's deck, or only reasonable leaders for an
    /// empty deck. Always in ordinal order.
    fn legal_moves(&self) -> Vec<Card> {
        if self.current_deck.len() >= DECK_SIZE {
            Vec::new()
        } else if self.current_deck.is_empty() {
            Card::reasonable_leaders().collect()
        } else {
            Card::ALL
                .into_iter()
                .filter(|card| !self.current_deck.contains(card))
                .collect()
        }
    }

    fn is_terminal(&self) -> bool {
        self.current_deck.len() == DECK_SIZE && self.next_deck.len() == DECK_SIZE
    }

    fn apply(&self, mv: Card) -> Self {
        let mut picked = self.current_deck.clone();
        picked.push_back(mv);
        Self {
            current_agent: self.current_agent.opponent(),
            current_deck: self.next_deck.clone(),
            next_deck: picked,
        }
    }
}
