//! One generation: draw hands from both sides' roulettes, play every
//! pairing, and fold the credit back into new fitness tables.

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::battle::BattleResult;
use crate::core::GameRng;

use super::config::FitnessPolicy;
use super::fitness::{FitnessTable, Hand, Roulette, SLOTS};
use super::game::FitnessGame;

/// Draw `count` hands, sampling each slot from its own roulette.
pub fn draw_hands<T: Copy>(roulettes: &[Roulette<T>; SLOTS], count: usize, rng: &mut GameRng) -> Vec<Hand<T>> {
    (0..count)
        .map(|_| roulettes.iter().map(|roulette| roulette.sample(rng)).collect())
        .collect()
}

/// Both sides' tables after one generation.
#[derive(Clone, Debug)]
pub struct Generation<T: Copy + Eq + Hash> {
    pub player: FitnessTable<T>,
    pub opponent: FitnessTable<T>,
}

impl<T: Copy + Eq + Hash + Ord + Debug + Send + Sync> Generation<T> {
    /// Starting tables for the given committed seeds.
    pub fn initial<G: FitnessGame<Token = T>>(game: &G, player_seed: &[T], opponent_seed: &[T]) -> Self {
        Self {
            player: FitnessTable::initial(player_seed, game.alphabet(), game.excluded_leading()),
            opponent: FitnessTable::initial(opponent_seed, game.alphabet(), game.excluded_leading()),
        }
    }

    /// Run one generation of `size` hands per side on `pool`.
    ///
    /// Hands are drawn sequentially from `rng`; the `size²` battles run in
    /// parallel, one task per player hand.
    #[must_use]
    pub fn advance<G: FitnessGame<Token = T>>(
        &self,
        game: &G,
        size: usize,
        policy: FitnessPolicy,
        rng: &mut GameRng,
        pool: &ThreadPool,
    ) -> Self {
        let player_hands = draw_hands(&self.player.roulettes(game.alphabet()), size, rng);
        let opponent_hands = draw_hands(&self.opponent.roulettes(game.alphabet()), size, rng);

        let results: Vec<Vec<BattleResult>> = pool.install(|| {
            player_hands
                .par_iter()
                .map(|player| {
                    opponent_hands
                        .iter()
                        .map(|opponent| game.play(player, opponent))
                        .collect()
                })
                .collect()
        });

        let mut player_credit = vec![0.0; size];
        let mut opponent_credit = vec![0.0; size];
        for (i, row) in results.iter().enumerate() {
            for (j, &result) in row.iter().enumerate() {
                let (player, opponent) = policy.credit(result);
                player_credit[i] += player;
                opponent_credit[j] += opponent;
            }
        }

        Self {
            player: self.player.next_generation(&player_hands, &player_credit, size),
            opponent: self.opponent.next_generation(&opponent_hands, &opponent_credit, size),
        }
    }

    /// Log the leading token of `slot` on each side.
    pub fn log_best(&self, index: u64, slot: usize) {
        if slot >= SLOTS {
            return;
        }
        let best = |table: &FitnessTable<T>| table.best(slot).map(|t| (t, table.weight(slot, t)));
        debug!(
            "generation {index}: slot {slot} best player {:?}, best opponent {:?}",
            best(&self.player),
            best(&self.opponent)
        );
    }
}
