//! Decision-process trait for game implementations.
//!
//! Games implement `State` to define:
//! - Who is to move
//! - What moves are legal
//! - How a move produces the next state
//! - When the process is over
//!
//! Implementations are immutable values: `apply` returns a new state and
//! never mutates `self`, so one state can be read by many search workers at
//! once.

use std::fmt::Debug;
use std::hash::Hash;

/// An immutable state of a sequential decision process.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return an empty vec on terminal states
/// - `apply`: Must be deterministic; the search replays it from many threads
/// - `current_agent`: On a terminal state, the agent that would move next
pub trait State: Clone + Send + Sync {
    /// Side making decisions.
    type Agent: Copy + Eq + Hash + Debug + Send + Sync;

    /// A single decision.
    type Move: Copy + Eq + Hash + Debug + Send + Sync;

    /// The agent whose move it is.
    fn current_agent(&self) -> Self::Agent;

    /// Every move the current agent may make.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Is the process over?
    fn is_terminal(&self) -> bool;

    /// The state after the current agent makes `mv`.
    fn apply(&self, mv: Self::Move) -> Self;
}
