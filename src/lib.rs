//! # troop-draft
//!
//! Draft advisor for a two-player, six-card battle game.
//!
//! Each player drafts six troops from a closed pool of 27 archetypes, one
//! pick at a time. The finished decks then fight an automatic battle. This
//! crate resolves that battle and searches for the best next pick.
//!
//! ## Architecture
//!
//! - **Deterministic Resolver**: A battle is a pure function of the two
//!   decks. Both search engines call it millions of times from many threads.
//!
//! - **Parallel MCTS**: Workers share one tree with per-node locks and a
//!   lock-free node arena. Persistent vectors (`im-rs`) make draft states
//!   cheap to clone.
//!
//! - **Genetic Optimizer**: Per-slot fitness tables evolved by playing
//!   sampled hands against each other on a `rayon` pool.
//!
//! - **Seeded Randomness**: Every stochastic component draws from a
//!   ChaCha8 `GameRng`, so single-threaded runs reproduce exactly.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, search budgets
//! - `cards`: The archetype alphabet and runtime card instances
//! - `battle`: Damage rules, abilities and the battle resolver
//! - `rules`: The `State` trait searched by MCTS
//! - `draft`: Draft positions and the combat oracle
//! - `mcts`: Monte Carlo Tree Search
//! - `genetic`: Genetic optimizer
//! - `ai`: `mcts_pick` and `genetic_pick`

pub mod ai;
pub mod battle;
pub mod cards;
pub mod core;
pub mod draft;
pub mod genetic;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, SearchBudget};

pub use crate::cards::{AbilityClass, Card, CardInstance, DECK_SIZE};

pub use crate::battle::{resolve, resolve_with_summary, Battle, BattleResult, BoardSnapshot};

pub use crate::rules::State;

pub use crate::draft::{CombatGame, CombatOracle, DraftError, DraftState};

pub use crate::mcts::{MCTSConfig, MCTSSearch, PlayoutOracle, SearchError, SearchStats};

pub use crate::genetic::{FitnessGame, FitnessPolicy, GeneticConfig, GeneticError, GeneticOptimizer};

pub use crate::ai::{genetic_pick, mcts_pick, PickError};
