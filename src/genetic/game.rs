//! Fitness game trait for the genetic optimizer.

use std::fmt::Debug;
use std::hash::Hash;

use crate::battle::BattleResult;

/// A symmetric two-player game between fixed-length hands of tokens.
///
/// ## Implementation Notes
///
/// - `alphabet`: Every token a hand may hold, in a fixed order
/// - `excluded_leading`: Tokens never sampled for the first slot
/// - `play`: Must be deterministic; it is called from many threads at once
pub trait FitnessGame: Sync {
    /// A single card-like token.
    type Token: Copy + Eq + Hash + Ord + Debug + Send + Sync;

    /// All tokens.
    fn alphabet(&self) -> &[Self::Token];

    /// Tokens excluded from the first slot.
    fn excluded_leading(&self) -> &[Self::Token];

    /// Play `player` (as player 1) against `opponent`.
    fn play(&self, player: &[Self::Token], opponent: &[Self::Token]) -> BattleResult;
}
