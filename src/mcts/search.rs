//! Core MCTS search algorithm.
//!
//! Parallel UCT over one shared tree. Every worker runs
//! select -> expand -> playout -> backpropagate until the stop condition
//! says otherwise; the best move is then read from the root with the
//! exploration term switched off.

use std::marker::PhantomData;
use std::thread;
use std::time::Instant;

use log::{debug, trace, warn};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{GameRng, SearchBudget};
use crate::rules::State;

use super::config::MCTSConfig;
use super::node::{Node, NodeId};
use super::policy::{uct_score, PlayoutOracle};
use super::stats::{SearchStats, StatsCounters};
use super::tree::{SearchTree, MAX_CAPACITY};

/// Errors that can occur during MCTS search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("cannot search from a terminal state")]
    TerminalState,

    #[error("root has no children to choose from")]
    NoChildren,

    #[error("root still has {untried} untried move(s)")]
    NotFullyExpanded { untried: usize },

    #[error("a child of the root was never visited")]
    UnvisitedChild,
}

/// Main MCTS search context.
///
/// Generic over the decision process and the oracle that finishes and
/// scores its games. Holds no tree between calls: every search builds its
/// own and drops it once the move is chosen.
pub struct MCTSSearch<S: State, O: PlayoutOracle<S>> {
    /// Game-specific playouts and rewards.
    oracle: O,

    /// Search configuration.
    config: MCTSConfig,

    _state: PhantomData<fn() -> S>,
}

impl<S: State, O: PlayoutOracle<S>> MCTSSearch<S, O> {
    /// Create a new MCTS search context.
    pub fn new(oracle: O, config: MCTSConfig) -> Self {
        Self {
            oracle,
            config,
            _state: PhantomData,
        }
    }

    /// Best move from `start` within `budget`.
    pub fn search(&self, start: &S, budget: SearchBudget) -> Result<S::Move, SearchError> {
        self.search_with_stats(start, budget).map(|(mv, _)| mv)
    }

    /// Best move from `start` within `budget`, with search statistics.
    pub fn search_with_stats(
        &self,
        start: &S,
        budget: SearchBudget,
    ) -> Result<(S::Move, SearchStats), SearchError> {
        let tracker = budget.start();
        self.search_until(start, || tracker.keep_going())
    }

    /// Search until `keep_going` returns false.
    ///
    /// Every worker polls `keep_going` once before each iteration, so an
    /// iteration that has started always completes.
    pub fn search_until<F>(&self, start: &S, keep_going: F) -> Result<(S::Move, SearchStats), SearchError>
    where
        F: Fn() -> bool + Sync,
    {
        if start.is_terminal() {
            return Err(SearchError::TerminalState);
        }

        let started = Instant::now();
        let mut rng = GameRng::new(self.config.seed);
        if self.config.max_nodes > MAX_CAPACITY {
            warn!("max_nodes {} capped at {MAX_CAPACITY}", self.config.max_nodes);
        }
        let capacity = self.config.max_nodes.clamp(1, MAX_CAPACITY);
        let tree = SearchTree::new(Node::root(start.clone(), &mut rng), capacity);
        let counters = StatsCounters::default();

        let mut worker_rngs: Vec<GameRng> = (0..self.config.worker_count()).map(|_| rng.fork()).collect();
        thread::scope(|scope| {
            for worker_rng in &mut worker_rngs {
                let (tree, counters, keep_going) = (&tree, &counters, &keep_going);
                scope.spawn(move || {
                    while keep_going() {
                        self.iteration(tree, counters, worker_rng);
                    }
                });
            }
        });

        let stats = counters.finish(started.elapsed().as_micros() as u64);
        debug!(
            "search finished: {} iterations, {} nodes{}, {} us",
            stats.iterations,
            tree.len(),
            if tree.is_full() { " (arena full)" } else { "" },
            stats.time_us
        );

        let mv = best_move(&tree)?;
        Ok((mv, stats))
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Get the oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Single MCTS iteration: select, expand, play out, backpropagate.
    fn iteration(&self, tree: &SearchTree<S>, counters: &StatsCounters, rng: &mut GameRng) {
        counters.iteration();

        let leaf = self.select_and_expand(tree, counters, rng);
        let terminal = self.oracle.playout(&tree.get(leaf).state, rng);
        counters.playout();

        self.backpropagate(tree, leaf, &terminal);
    }

    /// Walk down by UCT until a node still has an untried move, then add the
    /// child for that move. Returns the node to play out from.
    fn select_and_expand(&self, tree: &SearchTree<S>, counters: &StatsCounters, rng: &mut GameRng) -> NodeId {
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.state.is_terminal() {
                return current;
            }

            let children = {
                let mut expansion = node.expansion();
                if let Some(mv) = expansion.untried.pop() {
                    let state = node.state.apply(mv);
                    let child = Node::new(state, Some(mv), node.state.current_agent(), current, rng);
                    return match tree.alloc(child) {
                        Some(id) => {
                            expansion.children.push(id);
                            counters.expansion();
                            trace!("expanded {id} under {current} with {mv:?}");
                            id
                        }
                        None => {
                            expansion.untried.push(mv);
                            current
                        }
                    };
                }
                expansion.children.clone()
            };

            let parent_visits = node.stats().visits;
            let best = children
                .iter()
                .map(|&id| (id, uct_score(tree.get(id).stats(), parent_visits, self.config.exploration_constant)))
                .max_by(|(_, a), (_, b)| a.total_cmp(b));
            match best {
                Some((id, _)) => current = id,
                None => return current,
            }
        }
    }

    /// Add one visit and the terminal reward to every node from `leaf` up to
    /// the root, each scored for the agent that moved into it.
    fn backpropagate(&self, tree: &SearchTree<S>, leaf: NodeId, terminal: &S) {
        let mut rewards: SmallVec<[(S::Agent, f64); 2]> = SmallVec::new();
        let mut current = leaf;
        loop {
            let node = tree.get(current);
            let reward = match rewards.iter().find(|(agent, _)| *agent == node.moved_by) {
                Some(&(_, reward)) => reward,
                None => {
                    let reward = self.oracle.reward(terminal, node.moved_by);
                    rewards.push((node.moved_by, reward));
                    reward
                }
            };
            node.record(reward);

            if node.is_root() {
                break;
            }
            current = node.parent;
        }
    }
}

/// The root child with the best mean reward.
fn best_move<S: State>(tree: &SearchTree<S>) -> Result<S::Move, SearchError> {
    let root = tree.root_node();
    let root_visits = root.stats().visits;
    let expansion = root.expansion();

    if expansion.children.is_empty() {
        return Err(SearchError::NoChildren);
    }
    if !expansion.untried.is_empty() {
        return Err(SearchError::NotFullyExpanded {
            untried: expansion.untried.len(),
        });
    }

    let mut best: Option<(S::Move, f64)> = None;
    for &id in &expansion.children {
        let child = tree.get(id);
        let stats = child.stats();
        if stats.visits == 0 {
            return Err(SearchError::UnvisitedChild);
        }
        let score = uct_score(stats, root_visits, 0.0);
        if let Some(mv) = child.mv {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
    }

    best.map(|(mv, _)| mv).ok_or(SearchError::NoChildren)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Take 1 or 2 from a pile; whoever takes the last one wins.
    #[derive(Clone, Debug, PartialEq)]
    struct Pile {
        to_move: u8,
        left: u8,
    }

    impl State for Pile {
        type Agent = u8;
        type Move = u8;

        fn current_agent(&self) -> u8 {
            self.to_move
        }

        fn legal_moves(&self) -> Vec<u8> {
            (1..=2).filter(|&n| n <= self.left).collect()
        }

        fn is_terminal(&self) -> bool {
            self.left == 0
        }

        fn apply(&self, mv: u8) -> Self {
            Self {
                to_move: 1 - self.to_move,
                left: self.left - mv,
            }
        }
    }

    struct LastTakeWins;

    impl PlayoutOracle<Pile> for LastTakeWins {
        fn reward(&self, terminal: &Pile, agent: u8) -> f64 {
            // The agent left to move has nothing to take.
            if agent == terminal.to_move {
                0.0
            } else {
                1.0
            }
        }
    }

    fn pile(left: u8) -> Pile {
        Pile { to_move: 0, left }
    }

    fn search(config: MCTSConfig) -> MCTSSearch<Pile, LastTakeWins> {
        MCTSSearch::new(LastTakeWins, config)
    }

    #[test]
    fn test_terminal_start_fails() {
        let result = search(MCTSConfig::default()).search(&pile(0), SearchBudget::Iterations(10));
        assert_eq!(result, Err(SearchError::TerminalState));
    }

    #[test]
    fn test_finds_winning_move() {
        let config = MCTSConfig::default().with_threads(1);
        let mv = search(config).search(&pile(4), SearchBudget::Iterations(2000)).unwrap();

        // Leaving 3 loses for the opponent whatever it takes.
        assert_eq!(mv, 1);
    }

    #[test]
    fn test_finds_winning_move_in_parallel() {
        let config = MCTSConfig::default().with_threads(4);
        let mv = search(config).search(&pile(5), SearchBudget::Iterations(4000)).unwrap();
        assert_eq!(mv, 2);
    }

    #[test]
    fn test_search_stats() {
        let config = MCTSConfig::default().with_threads(3);
        let (_, stats) = search(config)
            .search_with_stats(&pile(6), SearchBudget::Iterations(300))
            .unwrap();

        assert_eq!(stats.iterations, 300);
        assert_eq!(stats.playouts, 300);
        assert!(stats.nodes_expanded > 0);
        assert!(stats.nodes_expanded <= 300);
    }

    #[test]
    fn test_search_deterministic_single_worker() {
        let config = MCTSConfig::default().with_threads(1).with_seed(12345);

        let (mv1, stats1) = search(config.clone())
            .search_with_stats(&pile(7), SearchBudget::Iterations(500))
            .unwrap();
        let (mv2, stats2) = search(config)
            .search_with_stats(&pile(7), SearchBudget::Iterations(500))
            .unwrap();

        assert_eq!(mv1, mv2);
        assert_eq!(stats1.nodes_expanded, stats2.nodes_expanded);
    }

    #[test]
    fn test_under_explored_root_fails() {
        let config = MCTSConfig::default().with_threads(1);

        assert_eq!(
            search(config.clone()).search(&pile(4), SearchBudget::Iterations(0)),
            Err(SearchError::NoChildren)
        );
        assert_eq!(
            search(config).search(&pile(4), SearchBudget::Iterations(1)),
            Err(SearchError::NotFullyExpanded { untried: 1 })
        );
    }

    #[test]
    fn test_full_tree_still_answers() {
        let config = MCTSConfig::default().with_threads(2).with_max_nodes(3);
        let (mv, stats) = search(config)
            .search_with_stats(&pile(4), SearchBudget::Iterations(200))
            .unwrap();

        assert!(mv == 1 || mv == 2);
        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.iterations, 200);
    }

    #[test]
    fn test_oversized_node_limit_is_capped() {
        let config = MCTSConfig::default().with_threads(1).with_max_nodes(usize::MAX);
        let mv = search(config).search(&pile(4), SearchBudget::Iterations(2000)).unwrap();

        assert_eq!(mv, 1);
    }

    #[test]
    fn test_time_limited_search() {
        let result = search(MCTSConfig::default()).search(&pile(10), SearchBudget::TimeLimit(20));
        assert!(result.is_ok());
    }
}
