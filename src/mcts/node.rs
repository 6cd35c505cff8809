//! MCTS node structures.
//!
//! Nodes live in the arena of `SearchTree` and refer to each other by
//! `NodeId`. Each node carries two independent locks: one for expansion
//! (claiming an untried move and recording the child) and one for its
//! visit statistics. Workers never hold more than one node's locks at a time.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::rules::State;

/// Index into the search tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Visit count and accumulated reward of one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    /// Backpropagations through this node.
    pub visits: u32,

    /// Sum of rewards, from the point of view of the agent that moved into
    /// this node.
    pub total_reward: f64,
}

impl NodeStats {
    /// Mean reward (0 when unvisited).
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }
}

/// Expansion bookkeeping guarded by one lock.
#[derive(Debug)]
pub struct Expansion<M> {
    /// Legal moves with no child yet, pre-shuffled; the next one is popped.
    pub untried: Vec<M>,

    /// Children in creation order.
    pub children: Vec<NodeId>,
}

/// A node in the MCTS tree.
#[derive(Debug)]
pub struct Node<S: State> {
    /// Position at this node.
    pub state: S,

    /// Move that produced this node (None for the root).
    pub mv: Option<S::Move>,

    /// Agent whose move produced this node. Rewards are stored from its
    /// perspective. For the root this is the agent to move.
    pub moved_by: S::Agent,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    expansion: Mutex<Expansion<S::Move>>,
    stats: Mutex<NodeStats>,
}

impl<S: State> Node<S> {
    /// Create a node with its untried moves shuffled by `rng`.
    pub fn new(
        state: S,
        mv: Option<S::Move>,
        moved_by: S::Agent,
        parent: NodeId,
        rng: &mut GameRng,
    ) -> Self {
        let mut untried = state.legal_moves();
        rng.shuffle(&mut untried);
        Self {
            state,
            mv,
            moved_by,
            parent,
            expansion: Mutex::new(Expansion {
                untried,
                children: Vec::new(),
            }),
            stats: Mutex::new(NodeStats::default()),
        }
    }

    /// Create a root node.
    pub fn root(state: S, rng: &mut GameRng) -> Self {
        let agent = state.current_agent();
        Self::new(state, None, agent, NodeId::NONE, rng)
    }

    /// Lock the expansion data.
    ///
    /// A poisoned lock is recovered: the data is only ever pushed to or
    /// popped from, so a panicking holder cannot leave it half-written.
    pub fn expansion(&self) -> MutexGuard<'_, Expansion<S::Move>> {
        self.expansion.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the statistics.
    #[must_use]
    pub fn stats(&self) -> NodeStats {
        *self.stats.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record one visit with the given reward.
    pub fn record(&self, reward: f64) {
        let mut stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        stats.visits += 1;
        stats.total_reward += reward;
    }

    /// Is this the root?
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::Player;
    use crate::draft::DraftState;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_stats_mean() {
        let mut stats = NodeStats::default();
        assert_eq!(stats.mean_reward(), 0.0);

        stats.visits = 4;
        stats.total_reward = 3.0;
        assert_eq!(stats.mean_reward(), 0.75);
    }

    #[test]
    fn test_root_holds_every_legal_move() {
        let mut rng = GameRng::new(1);
        let state = DraftState::initial();
        let node = Node::root(state.clone(), &mut rng);

        assert!(node.is_root());
        assert_eq!(node.moved_by, Player::Player1);
        assert!(node.mv.is_none());

        let mut untried = node.expansion().untried.clone();
        let mut expected = state.legal_moves();
        untried.sort();
        expected.sort();
        assert_eq!(untried, expected);
        assert!(node.expansion().children.is_empty());
    }

    #[test]
    fn test_record() {
        let mut rng = GameRng::new(1);
        let node = Node::new(
            DraftState::initial().apply(Card::Ninja),
            Some(Card::Ninja),
            Player::Player1,
            NodeId::new(0),
            &mut rng,
        );

        node.record(1.0);
        node.record(0.5);

        let stats = node.stats();
        assert_eq!(stats.visits, 2);
        assert_eq!(stats.total_reward, 1.5);
    }
}
