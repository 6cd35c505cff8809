//! Monte Carlo Tree Search over any `State`.
//!
//! ## Overview
//!
//! Parallel UCT: one worker thread per core shares a single tree. Key
//! features:
//!
//! - **Node-local locking**: Expansion and statistics each have their own
//!   lock per node; there is no global tree lock
//! - **Lock-free arena**: Nodes are appended to a segmented arena and
//!   addressed by `NodeId`
//! - **Oracle-driven leaves**: Playouts and rewards come from a
//!   `PlayoutOracle`, so the search knows nothing game-specific
//! - **Seeded**: With one worker the same seed produces the same search
//!
//! ## Usage
//!
//! ```rust
//! use troop_draft::core::SearchBudget;
//! use troop_draft::draft::{CombatOracle, DraftState};
//! use troop_draft::mcts::{MCTSConfig, MCTSSearch};
//!
//! let search = MCTSSearch::new(CombatOracle, MCTSConfig::default().with_threads(2));
//! let card = search
//!     .search(&DraftState::initial(), SearchBudget::Iterations(200))
//!     .unwrap();
//! assert!(card.is_reasonable_leader());
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{Node, NodeId, NodeStats};
pub use policy::{random_playout, uct_score, PlayoutOracle};
pub use search::{MCTSSearch, SearchError};
pub use stats::SearchStats;
pub use tree::SearchTree;
