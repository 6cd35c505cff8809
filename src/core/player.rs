//! Player identification for the two-sided draft.
//!
//! The draft and the battle are strictly two-player, so unlike a general
//! N-player engine the agent is a closed enum with an `opponent()` flip.

use serde::{Deserialize, Serialize};

/// One of the two drafting sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The side that picks first in a draft round (left column of a board).
    Player1,
    /// The other side.
    Player2,
}

impl Player {
    /// Both players in seating order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// 0-based seat index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}
