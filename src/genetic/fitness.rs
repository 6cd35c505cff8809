//! Per-slot fitness tables and the roulettes sampled from them.
//!
//! A `FitnessTable` holds one token -> weight map per deck slot. Slots the
//! caller already committed are pinned: they always yield their token and are
//! excluded from every fallback roulette.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::DECK_SIZE;
use crate::core::GameRng;

/// Slots per hand.
pub const SLOTS: usize = DECK_SIZE;

/// One candidate hand, slot 0 first.
pub type Hand<T> = SmallVec<[T; SLOTS]>;

/// Weighted sampler over tokens, entries sorted by token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roulette<T> {
    tokens: Vec<T>,
    weights: Vec<u32>,
}

impl<T: Copy> Roulette<T> {
    /// Draw one token with probability proportional to its weight.
    ///
    /// # Panics
    ///
    /// Panics if every weight is zero. Roulettes built by `FitnessTable`
    /// always have a positive total.
    pub fn sample(&self, rng: &mut GameRng) -> T {
        match rng.choose_weighted(&self.weights) {
            Some(i) => self.tokens[i],
            None => panic!("roulette has no weight to draw from"),
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }

    /// `(token, weight)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        self.tokens.iter().copied().zip(self.weights.iter().copied())
    }
}

/// Fitness weights for every slot of one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitnessTable<T: Eq + Hash> {
    slots: [FxHashMap<T, u32>; SLOTS],
    pins: [Option<T>; SLOTS],
}

impl<T: Copy + Eq + Hash + Ord> FitnessTable<T> {
    /// Starting table: committed slots pinned at weight 1, every other slot
    /// uniform over the tokens not yet committed. Slot 0 also leaves out
    /// `excluded_leading`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is longer than a hand.
    #[must_use]
    pub fn initial(seed: &[T], alphabet: &[T], excluded_leading: &[T]) -> Self {
        assert!(seed.len() <= SLOTS, "seed of {} tokens exceeds {SLOTS} slots", seed.len());

        let pins = std::array::from_fn(|slot| seed.get(slot).copied());
        let slots = std::array::from_fn(|slot| match seed.get(slot) {
            Some(&pinned) => std::iter::once((pinned, 1)).collect(),
            None => alphabet
                .iter()
                .copied()
                .filter(|token| !seed.contains(token))
                .filter(|token| slot > 0 || !excluded_leading.contains(token))
                .map(|token| (token, 1))
                .collect(),
        });

        Self { slots, pins }
    }

    /// The token committed to a slot, if any.
    #[must_use]
    pub fn pin(&self, slot: usize) -> Option<T> {
        self.pins[slot]
    }

    /// Weight of `token` at `slot` (0 if unobserved).
    #[must_use]
    pub fn weight(&self, slot: usize, token: T) -> u32 {
        self.slots[slot].get(&token).copied().unwrap_or(0)
    }

    /// Every `(token, weight)` at `slot`, sorted by token.
    #[must_use]
    pub fn entries(&self, slot: usize) -> Vec<(T, u32)> {
        let mut entries: Vec<_> = self.slots[slot].iter().map(|(&t, &w)| (t, w)).collect();
        entries.sort_unstable();
        entries
    }

    /// Highest-weight token at `slot`; ties go to the smallest token.
    #[must_use]
    pub fn best(&self, slot: usize) -> Option<T> {
        self.entries(slot)
            .into_iter()
            .max_by(|(ta, wa), (tb, wb)| wa.cmp(wb).then(tb.cmp(ta)))
            .map(|(token, _)| token)
    }

    /// Roulette for `slot`.
    ///
    /// A pinned slot yields only its token. A slot whose weights sum to 0
    /// falls back to weight 1 for every token of `alphabet` that is not
    /// pinned anywhere, so the total is always positive.
    #[must_use]
    pub fn roulette(&self, slot: usize, alphabet: &[T]) -> Roulette<T> {
        if let Some(pinned) = self.pins[slot] {
            return Roulette {
                tokens: vec![pinned],
                weights: vec![1],
            };
        }

        let (tokens, weights): (Vec<T>, Vec<u32>) = self.entries(slot).into_iter().unzip();
        if weights.iter().any(|&w| w > 0) {
            return Roulette { tokens, weights };
        }

        let mut tokens: Vec<T> = alphabet
            .iter()
            .copied()
            .filter(|token| !self.pins.contains(&Some(*token)))
            .collect();
        if tokens.is_empty() {
            tokens = alphabet.to_vec();
        }
        tokens.sort_unstable();
        let weights = vec![1; tokens.len()];
        Roulette { tokens, weights }
    }

    /// Roulettes for every slot.
    #[must_use]
    pub fn roulettes(&self, alphabet: &[T]) -> [Roulette<T>; SLOTS] {
        std::array::from_fn(|slot| self.roulette(slot, alphabet))
    }

    /// Table for the next generation from this generation's hands.
    ///
    /// `credit[i]` is the total credit of `hands[i]` over `games_per_hand`
    /// battles. Each observed token's new weight is
    /// `round(100 * credit / games)` over all hands holding it at that slot.
    #[must_use]
    pub fn next_generation(&self, hands: &[Hand<T>], credit: &[f64], games_per_hand: usize) -> Self {
        let slots = std::array::from_fn(|slot| {
            let mut tally: FxHashMap<T, (f64, usize)> = FxHashMap::default();
            for (hand, &hand_credit) in hands.iter().zip(credit) {
                let entry = tally.entry(hand[slot]).or_insert((0.0, 0));
                entry.0 += hand_credit;
                entry.1 += 1;
            }
            tally
                .into_iter()
                .map(|(token, (total, count))| {
                    let games = (count * games_per_hand) as f64;
                    (token, (100.0 * total / games).round() as u32)
                })
                .collect()
        });

        Self {
            slots,
            pins: self.pins,
        }
    }
}
