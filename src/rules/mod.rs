//! Decision-process trait for game implementations.
//!
//! Games implement `State` to define:
//! - Legal moves for each state
//! - How moves produce new states
//! - When the process ends
//!
//! The search engine calls into `State` but never interprets
//! game-specific concepts directly.

pub mod state;

pub use state::State;
