//! Card system: the closed archetype alphabet and runtime instances.
//!
//! ## Key Types
//!
//! - `Card`: Drafted token, one variant per archetype, with static stats
//! - `AbilityClass`: None / attack special / healing special
//! - `CardInstance`: Runtime copy with current HP and the shield flag

pub mod card;
pub mod instance;

pub use card::{AbilityClass, Card, CARD_COUNT, DECK_SIZE, NEVER_OPTIMAL_LEADING};
pub use instance::CardInstance;
