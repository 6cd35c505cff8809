//! The draft as a decision process, and the combat oracle that scores it.
//!
//! ## Key Types
//!
//! - `DraftState`: Immutable draft position implementing `rules::State`
//! - `CombatOracle`: Random playouts plus battle-based rewards for MCTS
//! - `CombatGame`: The same battle as the genetic optimizer's fitness game
//! - `DraftError`: Rejected partial decks

pub mod oracle;
pub mod state;

pub use oracle::{CombatGame, CombatOracle};
pub use state::{validate_deck, DraftError, DraftState};
