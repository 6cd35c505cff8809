//! Deterministic combat resolver.
//!
//! ## Overview
//!
//! Given the two draft sequences, `battle_order` builds the rank order of
//! each side and `resolve` plays the battle to completion. Nothing here is
//! random: the same pair of sequences always yields the same result and the
//! same turn-by-turn boards.
//!
//! ## Usage
//!
//! ```rust
//! use troop_draft::battle::{resolve, resolve_with_summary, BattleResult};
//! use troop_draft::cards::Card;
//!
//! let deck = [Card::Spearsman; 6];
//! assert_eq!(resolve(&deck, &deck), BattleResult::Draw);
//!
//! let (_, boards) = resolve_with_summary(&[Card::Ninja], &[Card::Shieldbot]);
//! assert_eq!(boards.len(), 2);
//! ```

pub mod abilities;
pub mod damage;
pub mod deck;
pub mod lineup;
pub mod resolver;

pub use abilities::{attack_pattern, heal_pattern, healing_phase, AttackPattern, HealPattern};
pub use damage::strike;
pub use deck::Deck;
pub use lineup::{battle_order, Lineup};
pub use resolver::{resolve, resolve_with_summary, Battle, BattleResult, BoardSnapshot, STALEMATE_TURNS};
