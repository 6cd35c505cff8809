//! MCTS policies for selection and playouts.
//!
//! - `uct_score`: How to choose which child to explore
//! - `PlayoutOracle`: How to finish a game from a leaf and score the result

use crate::core::GameRng;
use crate::rules::State;

use super::node::NodeStats;

// =============================================================================
// Selection
// =============================================================================

/// UCT score of a child.
///
/// Formula: mean + c * sqrt(2 * ln(N) / n), where `N` is the parent's visit
/// count and `n` the child's. Unvisited children score `+inf` so every move
/// is tried before any is revisited.
#[must_use]
pub fn uct_score(child: NodeStats, parent_visits: u32, exploration: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }
    let exploitation = child.mean_reward();
    if exploration == 0.0 {
        return exploitation;
    }
    let ln_parent = f64::from(parent_visits.max(1)).ln();
    exploitation + exploration * (2.0 * ln_parent / f64::from(child.visits)).sqrt()
}

// =============================================================================
// Playout Oracle
// =============================================================================

/// Game-specific knowledge the search needs at the leaves.
pub trait PlayoutOracle<S: State>: Sync {
    /// Play from `state` to a terminal state.
    ///
    /// Default implementation picks uniformly random legal moves.
    fn playout(&self, state: &S, rng: &mut GameRng) -> S {
        random_playout(state, rng)
    }

    /// Reward in [0, 1] of a terminal state for `agent`:
    /// 1 = won, 0.5 = draw, 0 = lost.
    fn reward(&self, terminal: &S, agent: S::Agent) -> f64;
}

/// Play uniformly random legal moves until the state is terminal.
///
/// Stops early if a non-terminal state has no legal move.
pub fn random_playout<S: State>(state: &S, rng: &mut GameRng) -> S {
    let mut current = state.clone();
    while !current.is_terminal() {
        let moves = current.legal_moves();
        let Some(&mv) = rng.choose(&moves) else {
            break;
        };
        current = current.apply(mv);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::draft::DraftState;

    #[test]
    fn test_uct_selects_unvisited() {
        let unvisited = NodeStats::default();
        assert_eq!(uct_score(unvisited, 100, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_uct_formula() {
        let child = NodeStats {
            visits: 4,
            total_reward: 2.0,
        };
        let parent_visits = 20;

        let expected = 0.5 + 1.5 * (2.0 * 20f64.ln() / 4.0).sqrt();
        assert!((uct_score(child, parent_visits, 1.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uct_zero_exploration_is_mean() {
        let child = NodeStats {
            visits: 10,
            total_reward: 7.0,
        };
        assert_eq!(uct_score(child, 50, 0.0), 0.7);
    }

    #[test]
    fn test_exploration_favours_less_visited() {
        let explored = NodeStats {
            visits: 100,
            total_reward: 60.0,
        };
        let fresh = NodeStats {
            visits: 2,
            total_reward: 1.0,
        };

        assert!(uct_score(fresh, 102, 2.0) > uct_score(explored, 102, 2.0));
        assert!(uct_score(fresh, 102, 0.0) < uct_score(explored, 102, 0.0));
    }

    #[test]
    fn test_random_playout_reaches_terminal() {
        let mut rng = GameRng::new(9);
        let terminal = random_playout(&DraftState::initial(), &mut rng);

        assert!(terminal.is_terminal());
        assert_eq!(terminal.current_deck().len(), DECK_SIZE);
        assert_eq!(terminal.next_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_random_playout_is_seeded() {
        let a = random_playout(&DraftState::initial(), &mut GameRng::new(3));
        let b = random_playout(&DraftState::initial(), &mut GameRng::new(3));
        assert_eq!(a, b);
    }
}
