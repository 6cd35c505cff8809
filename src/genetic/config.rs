//! Genetic optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::battle::BattleResult;

/// How a drawn battle is credited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessPolicy {
    /// Only wins count.
    Winning,
    /// A draw counts as a win for both hands.
    WinningAndDraws,
    /// A draw counts as 0.6 of a win for both hands.
    WinningAndDrawsPartial,
}

impl FitnessPolicy {
    /// Credit for `(player hand, opponent hand)` from one battle.
    #[must_use]
    pub fn credit(self, result: BattleResult) -> (f64, f64) {
        match result {
            BattleResult::Player1Won => (1.0, 0.0),
            BattleResult::Player2Won => (0.0, 1.0),
            BattleResult::Draw => {
                let draw = self.draw_credit();
                (draw, draw)
            }
        }
    }

    fn draw_credit(self) -> f64 {
        match self {
            FitnessPolicy::Winning => 0.0,
            FitnessPolicy::WinningAndDraws => 1.0,
            FitnessPolicy::WinningAndDrawsPartial => 0.6,
        }
    }
}

/// Genetic optimizer configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// Hands drawn per side each generation. A generation resolves
    /// `generation_size²` battles.
    pub generation_size: usize,

    /// How draws are credited.
    pub fitness_policy: FitnessPolicy,

    /// Random seed for roulette sampling.
    pub seed: u64,

    /// Worker threads for battle evaluation (0 = one per core).
    pub threads: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generation_size: 100,
            fitness_policy: FitnessPolicy::WinningAndDrawsPartial,
            seed: 42,
            threads: 0,
        }
    }
}

impl GeneticConfig {
    /// Create a new config with a custom generation size.
    pub fn with_generation_size(mut self, generation_size: usize) -> Self {
        self.generation_size = generation_size;
        self
    }

    /// Create a new config with a custom draw policy.
    pub fn with_fitness_policy(mut self, policy: FitnessPolicy) -> Self {
        self.fitness_policy = policy;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a fixed worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Number of workers a generation will use.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}
