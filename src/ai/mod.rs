//! Advisor entry points: recommend the next card for a partial draft.

use thiserror::Error;

use crate::cards::{Card, DECK_SIZE};
use crate::core::{Player, SearchBudget};
use crate::draft::{validate_deck, CombatGame, CombatOracle, DraftError, DraftState};
use crate::genetic::{GeneticConfig, GeneticError, GeneticOptimizer};
use crate::mcts::{MCTSConfig, MCTSSearch, SearchError};

/// Any failure while recommending a pick.
#[derive(Debug, Error)]
pub enum PickError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Genetic(#[from] GeneticError),
}

fn validate(player_deck: &[Card], opponent_deck: &[Card]) -> Result<(), DraftError> {
    validate_deck(player_deck, DECK_SIZE - 1)?;
    validate_deck(opponent_deck, DECK_SIZE - 1)
}

/// Next card for `player_deck` by tree search, with the advisor as player 1
/// to move.
///
/// The advisor must hold as many cards as the opponent or one fewer, so that
/// alternating picks can fill both decks.
pub fn mcts_pick(
    player_deck: &[Card],
    opponent_deck: &[Card],
    budget: SearchBudget,
    config: &MCTSConfig,
) -> Result<Card, PickError> {
    validate(player_deck, opponent_deck)?;
    let state = DraftState::new(Player::Player1, player_deck, opponent_deck)?;
    let search = MCTSSearch::new(CombatOracle, config.clone());
    Ok(search.search(&state, budget)?)
}

/// Next card for `player_deck` by genetic optimization. `budget` counts
/// generations or wall-clock time.
pub fn genetic_pick(
    player_deck: &[Card],
    opponent_deck: &[Card],
    budget: SearchBudget,
    config: &GeneticConfig,
) -> Result<Card, PickError> {
    validate(player_deck, opponent_deck)?;
    let optimizer = GeneticOptimizer::new(CombatGame, config.clone());
    Ok(optimizer.optimize(player_deck, opponent_deck, budget)?)
}
