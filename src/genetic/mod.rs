//! Genetic optimizer over fixed-length hands.
//!
//! Each side keeps a fitness table per slot. A generation samples hands from
//! roulettes built on those tables, plays every player hand against every
//! opponent hand, and turns the credit each hand earned into the next
//! tables. Slots the caller already committed stay pinned throughout.
//!
//! ## Key Types
//!
//! - `FitnessGame`: The game being optimized (tokens plus a deterministic `play`)
//! - `FitnessTable`: Token weights per slot
//! - `GeneticOptimizer`: Runs generations until a `SearchBudget` is spent
//!
//! ## Example
//!
//! ```ignore
//! use troop_draft::cards::Card;
//! use troop_draft::core::SearchBudget;
//! use troop_draft::draft::CombatGame;
//! use troop_draft::genetic::{GeneticConfig, GeneticOptimizer};
//!
//! let optimizer = GeneticOptimizer::new(CombatGame, GeneticConfig::default());
//! let pick = optimizer.optimize(&[Card::Spearsman], &[], SearchBudget::Iterations(10))?;
//! ```

pub mod config;
pub mod fitness;
pub mod game;
pub mod generation;
pub mod optimizer;

pub use config::{FitnessPolicy, GeneticConfig};
pub use fitness::{FitnessTable, Hand, Roulette, SLOTS};
pub use game::FitnessGame;
pub use generation::{draw_hands, Generation};
pub use optimizer::{GeneticError, GeneticOptimizer};
