//! MCTS integration tests on the card draft.

use troop_draft::cards::{Card, CARD_COUNT};
use troop_draft::core::{Player, SearchBudget};
use troop_draft::draft::{CombatOracle, DraftState};
use troop_draft::mcts::{MCTSConfig, MCTSSearch, SearchError};
use troop_draft::rules::State;

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_search_expands_every_root_move() {
    let state = DraftState::new(Player::Player1, &[Card::Guard], &[Card::Page]).unwrap();
    assert_eq!(state.legal_moves().len(), CARD_COUNT - 1);

    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(1));
    let result = search.search_with_stats(&state, SearchBudget::Iterations(CARD_COUNT as u64 - 1));

    let (mv, stats) = result.unwrap();
    assert_ne!(mv, Card::Guard);
    assert_eq!(stats.iterations, CARD_COUNT as u64 - 1);
    assert_eq!(stats.nodes_expanded, CARD_COUNT as u64 - 1);
}

#[test]
fn test_too_few_iterations_is_an_error() {
    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(1));
    let result = search.search(&DraftState::initial(), SearchBudget::Iterations(3));

    assert!(matches!(result, Err(SearchError::NotFullyExpanded { .. })));
}

#[test]
fn test_terminal_state_is_rejected() {
    let deck = [Card::Spearsman, Card::Guard, Card::Page, Card::Bowman, Card::Ninja, Card::Wallman];
    let terminal = DraftState::new(Player::Player1, &deck, &deck).unwrap();
    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default());

    assert_eq!(
        search.search(&terminal, SearchBudget::Iterations(100)),
        Err(SearchError::TerminalState)
    );
}

#[test]
fn test_opening_pick_is_reasonable_leader() {
    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(4));
    let pick = search.search(&DraftState::initial(), SearchBudget::Iterations(500)).unwrap();

    assert!(pick.is_reasonable_leader());
}

// =============================================================================
// Parallelism and Determinism
// =============================================================================

#[test]
fn test_single_thread_search_is_reproducible() {
    let state = DraftState::new(Player::Player1, &[Card::Ninja, Card::Guard], &[Card::Wallman, Card::Page]).unwrap();
    let config = MCTSConfig::default().with_threads(1).with_seed(17);
    let search = MCTSSearch::new(CombatOracle, config);

    let first = search.search(&state, SearchBudget::Iterations(400)).unwrap();
    let second = search.search(&state, SearchBudget::Iterations(400)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_search_counts_every_iteration() {
    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(4));
    let (_, stats) = search
        .search_with_stats(&DraftState::initial(), SearchBudget::Iterations(1_000))
        .unwrap();

    assert_eq!(stats.iterations, 1_000);
    assert_eq!(stats.playouts, 1_000);
    assert!(stats.nodes_expanded <= 1_000);
}

#[test]
fn test_full_arena_still_answers() {
    // Room for the root and its children only.
    let state = DraftState::new(Player::Player1, &[], &[Card::Guard]).unwrap();
    let leaders = state.legal_moves().len();
    let config = MCTSConfig::default().with_threads(2).with_max_nodes(leaders + 1);
    let search = MCTSSearch::new(CombatOracle, config);

    let (pick, stats) = search
        .search_with_stats(&state, SearchBudget::Iterations(300))
        .unwrap();

    assert!(pick.is_reasonable_leader());
    assert_eq!(stats.nodes_expanded, leaders as u64);
}

#[test]
fn test_time_limited_search() {
    let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(2));
    let pick = search.search(&DraftState::initial(), SearchBudget::TimeLimit(300));

    assert!(pick.unwrap().is_reasonable_leader());
}
