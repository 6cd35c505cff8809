//! Rank-indexed battle deck.
//!
//! A dense array of instances in battle order. Rank 1 is the frontline and
//! ranks are always contiguous `1..=ranks()`; removing a card renumbers
//! everything behind it. Indexing with `deck[rank]` panics on a rank that
//! does not exist, like slice indexing.

use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::cards::{Card, CardInstance, DECK_SIZE};

/// One side's cards during a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: SmallVec<[CardInstance; DECK_SIZE]>,
}

impl Deck {
    /// Create fresh instances in the given battle order.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().map(CardInstance::new).collect(),
        }
    }

    /// Number of occupied ranks (0 for an empty deck).
    #[inline]
    #[must_use]
    pub fn ranks(&self) -> usize {
        self.cards.len()
    }

    /// No cards left?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a 1-based rank, if present.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&CardInstance> {
        rank.checked_sub(1).and_then(|i| self.cards.get(i))
    }

    /// Mutable card at a 1-based rank, if present.
    pub fn get_mut(&mut self, rank: usize) -> Option<&mut CardInstance> {
        rank.checked_sub(1).and_then(move |i| self.cards.get_mut(i))
    }

    /// Does the card at `rank` have the given archetype?
    #[inline]
    #[must_use]
    pub fn is_at(&self, rank: usize, card: Card) -> bool {
        self.get(rank).is_some_and(|instance| instance.card == card)
    }

    /// Rank of the first instance of an archetype.
    #[must_use]
    pub fn rank_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| c.card == card).map(|i| i + 1)
    }

    /// Is any instance (alive or not yet removed) of this archetype present?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|c| c.card == card)
    }

    /// Remove the card at `rank`, collapsing the ranks behind it.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is not in `1..=ranks()`.
    pub fn remove_rank(&mut self, rank: usize) -> CardInstance {
        assert!(
            (1..=self.ranks()).contains(&rank),
            "rank {rank} out of range 1..={}",
            self.ranks()
        );
        self.cards.remove(rank - 1)
    }

    /// Remove every instance with HP below 1. Returns how many were removed.
    pub fn remove_killed(&mut self) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| c.is_alive());
        before - self.cards.len()
    }

    /// Iterate in rank order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CardInstance> + ExactSizeIterator {
        self.cards.iter()
    }

    /// Copy of the instances in rank order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardInstance> {
        self.cards.to_vec()
    }
}

impl Index<usize> for Deck {
    type Output = CardInstance;

    fn index(&self, rank: usize) -> &Self::Output {
        match self.get(rank) {
            Some(card) => card,
            None => panic!("no card at rank {rank} (deck has {} ranks)", self.ranks()),
        }
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, rank: usize) -> &mut Self::Output {
        let ranks = self.ranks();
        match self.get_mut(rank) {
            Some(card) => card,
            None => panic!("no card at rank {rank} (deck has {ranks} ranks)"),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
