//! Budgeted generation loop.

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

use crate::core::{GameRng, SearchBudget};
use crate::draft::DraftError;

use super::config::GeneticConfig;
use super::fitness::SLOTS;
use super::game::FitnessGame;
use super::generation::Generation;

/// Errors from a genetic optimization run.
#[derive(Debug, Error)]
pub enum GeneticError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("failed to start evaluation workers: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),

    #[error("no candidate token observed for slot {slot}")]
    NoCandidates { slot: usize },
}

/// Evolves fitness tables for both sides of a symmetric game and reports the
/// fittest next token for the player.
pub struct GeneticOptimizer<G: FitnessGame> {
    game: G,
    config: GeneticConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl<G: FitnessGame> GeneticOptimizer<G> {
    /// Create an optimizer that builds its own workers each generation.
    pub fn new(game: G, config: GeneticConfig) -> Self {
        Self {
            game,
            config,
            pool: None,
        }
    }

    /// Evaluate battles on a shared pool instead.
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Fittest token for slot `player_seed.len()` once the budget is spent.
    ///
    /// Ties go to the smallest token.
    pub fn optimize(
        &self,
        player_seed: &[G::Token],
        opponent_seed: &[G::Token],
        budget: SearchBudget,
    ) -> Result<G::Token, GeneticError> {
        let slot = player_seed.len();
        let tables = self.evolve(player_seed, opponent_seed, budget)?;
        tables.player.best(slot).ok_or(GeneticError::NoCandidates { slot })
    }

    /// Run generations until the budget is spent and return the final tables.
    pub fn evolve(
        &self,
        player_seed: &[G::Token],
        opponent_seed: &[G::Token],
        budget: SearchBudget,
    ) -> Result<Generation<G::Token>, GeneticError> {
        if self.config.generation_size == 0 {
            return Err(DraftError::EmptyGeneration.into());
        }
        for seed in [player_seed, opponent_seed] {
            if seed.len() >= SLOTS {
                return Err(DraftError::DeckFull { len: seed.len() }.into());
            }
        }

        let start = Instant::now();
        let mut rng = GameRng::new(self.config.seed);
        let mut generation = Generation::initial(&self.game, player_seed, opponent_seed);
        let tracker = budget.start();
        let mut index = 0u64;

        while tracker.keep_going() {
            let pool = self.pool()?;
            generation = generation.advance(
                &self.game,
                self.config.generation_size,
                self.config.fitness_policy,
                &mut rng,
                &pool,
            );
            index += 1;
            generation.log_best(index, player_seed.len());
        }

        debug!(
            "genetic search: {index} generations of {} in {:?}",
            self.config.generation_size,
            start.elapsed()
        );
        Ok(generation)
    }

    fn pool(&self) -> Result<Arc<ThreadPool>, ThreadPoolBuildError> {
        match &self.pool {
            Some(pool) => Ok(Arc::clone(pool)),
            None => ThreadPoolBuilder::new()
                .num_threads(self.config.worker_count())
                .build()
                .map(Arc::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleResult;
    use crate::genetic::FitnessPolicy;

    /// The higher token at slot 2 wins; tokens are plain numbers.
    struct ThirdSlotGame;

    const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    impl FitnessGame for ThirdSlotGame {
        type Token = u8;

        fn alphabet(&self) -> &[u8] {
            &DIGITS
        }

        fn excluded_leading(&self) -> &[u8] {
            &[]
        }

        fn play(&self, player: &[u8], opponent: &[u8]) -> BattleResult {
            match player[2].cmp(&opponent[2]) {
                std::cmp::Ordering::Greater => BattleResult::Player1Won,
                std::cmp::Ordering::Less => BattleResult::Player2Won,
                std::cmp::Ordering::Equal => BattleResult::Draw,
            }
        }
    }

    fn config() -> GeneticConfig {
        GeneticConfig::default()
            .with_generation_size(30)
            .with_fitness_policy(FitnessPolicy::Winning)
            .with_threads(2)
    }

    #[test]
    fn test_prefers_high_tokens() {
        let optimizer = GeneticOptimizer::new(ThirdSlotGame, config());
        let pick = optimizer
            .optimize(&[9, 8], &[], SearchBudget::Iterations(5))
            .unwrap();

        assert!(pick >= 5, "picked {pick}");
        assert!(![9, 8].contains(&pick));
    }

    #[test]
    fn test_zero_generations_picks_lowest() {
        let optimizer = GeneticOptimizer::new(ThirdSlotGame, config());
        let pick = optimizer.optimize(&[0], &[], SearchBudget::Iterations(0)).unwrap();
        assert_eq!(pick, 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        let optimizer = GeneticOptimizer::new(ThirdSlotGame, config().with_generation_size(0));
        assert!(matches!(
            optimizer.optimize(&[], &[], SearchBudget::Iterations(1)),
            Err(GeneticError::Draft(DraftError::EmptyGeneration))
        ));

        let optimizer = GeneticOptimizer::new(ThirdSlotGame, config());
        assert!(matches!(
            optimizer.optimize(&[1, 2, 3, 4, 5, 6], &[], SearchBudget::Iterations(1)),
            Err(GeneticError::Draft(DraftError::DeckFull { len: 6 }))
        ));
    }

    #[test]
    fn test_shared_pool_matches_owned() {
        let pool = Arc::new(ThreadPoolBuilder::new().num_threads(3).build().unwrap());
        let owned = GeneticOptimizer::new(ThirdSlotGame, config());
        let shared = GeneticOptimizer::new(ThirdSlotGame, config()).with_pool(pool);

        let a = owned.evolve(&[4], &[7], SearchBudget::Iterations(3)).unwrap();
        let b = shared.evolve(&[4], &[7], SearchBudget::Iterations(3)).unwrap();

        for slot in 0..SLOTS {
            assert_eq!(a.player.entries(slot), b.player.entries(slot));
        }
    }
}
