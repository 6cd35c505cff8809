//! Combat resolver as the oracle for both engines.
//!
//! `CombatOracle` finishes a draft with random picks and scores the finished
//! decks by resolving the battle. `CombatGame` exposes the same resolver as
//! the fitness game of the genetic optimizer.

use crate::battle::{resolve, BattleResult};
use crate::cards::{Card, NEVER_OPTIMAL_LEADING};
use crate::core::Player;
use crate::genetic::FitnessGame;
use crate::mcts::PlayoutOracle;

use super::state::DraftState;

/// Scores terminal draft states by resolving the battle.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombatOracle;

impl PlayoutOracle<DraftState> for CombatOracle {
    /// 1 if `agent`'s deck beats the other deck, 0.5 on a draw, 0 otherwise.
    fn reward(&self, terminal: &DraftState, agent: Player) -> f64 {
        let (own, other) = terminal.decks_for(agent);
        let own: Vec<Card> = own.iter().copied().collect();
        let other: Vec<Card> = other.iter().copied().collect();

        match resolve(&own, &other) {
            BattleResult::Player1Won => 1.0,
            BattleResult::Draw => 0.5,
            BattleResult::Player2Won => 0.0,
        }
    }
}

/// The draft battle as a symmetric two-player fitness game.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombatGame;

impl FitnessGame for CombatGame {
    type Token = Card;

    fn alphabet(&self) -> &[Card] {
        &Card::ALL
    }

    fn excluded_leading(&self) -> &[Card] {
        &NEVER_OPTIMAL_LEADING
    }

    fn play(&self, player: &[Card], opponent: &[Card]) -> BattleResult {
        resolve(player, opponent)
    }
}
