//! Card instances - runtime card state within one battle.
//!
//! A `CardInstance` is created fresh from its archetype at the start of
//! every resolved battle and never shared between battles or sides.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// A card in play.
///
/// Equality is value equality over archetype, current HP and the shield flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// The archetype this instance was created from.
    pub card: Card,

    /// Current HP. Drops below 1 before the instance is removed.
    pub current_hp: i32,

    /// Shield flag. Only a Shieldbot ever starts with it raised.
    pub shield_up: bool,
}

impl CardInstance {
    /// Create a fresh, undamaged instance.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            current_hp: card.max_hp(),
            shield_up: card == Card::Shieldbot,
        }
    }

    /// Maximum HP of the archetype.
    #[inline]
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.card.max_hp()
    }

    /// Current attack value.
    ///
    /// A Berserker gains 1 attack for every point of damage it has taken.
    #[must_use]
    pub fn attack(&self) -> i32 {
        match self.card {
            Card::Berserker => 1 + self.max_hp() - self.current_hp,
            card => card.base_attack(),
        }
    }

    /// Heal by `amount`, never above max HP.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = (self.current_hp + amount).min(self.max_hp());
    }

    /// Still in the fight?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp >= 1
    }

    /// Is this instance at full HP?
    #[inline]
    #[must_use]
    pub fn is_full_hp(&self) -> bool {
        self.current_hp == self.max_hp()
    }
}

impl From<Card> for CardInstance {
    fn from(card: Card) -> Self {
        Self::new(card)
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.card, self.current_hp)
    }
}
