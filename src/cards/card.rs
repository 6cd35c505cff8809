//! The closed card alphabet.
//!
//! `Card` is the token drafted by both sides. Every archetype's static data
//! (name, max HP, base attack, ability class) lives in one `match` per
//! property, so adding an archetype is a compile error until every table is
//! filled in.

use serde::{Deserialize, Serialize};

/// What kind of special behaviour an archetype has during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityClass {
    /// Only the base attack.
    None,
    /// Fires a multi-target pattern when in the frontline.
    AttackSpecial,
    /// Heals during the healing phase.
    HealingSpecial,
}

/// A card archetype. The ordinal is the stable token used by both engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Berserker,
    Gladiator,
    Guard,
    Halberder,
    Ninja,
    Shieldbot,
    Spearsman,
    Vampire,
    Wallman,
    Cannonball,
    Horseman,
    Siren,
    Sniper,
    Bowman,
    Dervish,
    Alchemist,
    Hammerman,
    Lanceman,
    MadBomber,
    Mage,
    Nurse,
    Medic,
    Cleric,
    MadScientist,
    Page,
    Shieldmaiden,
    Martyr,
}

/// Number of archetypes in the alphabet.
pub const CARD_COUNT: usize = 27;

/// Cards per finished deck.
pub const DECK_SIZE: usize = 6;

/// Archetypes that are never worth drafting into the leading slot.
pub const NEVER_OPTIMAL_LEADING: [Card; 11] = [
    Card::Wallman,
    Card::Cleric,
    Card::Medic,
    Card::Nurse,
    Card::Shieldmaiden,
    Card::MadScientist,
    Card::Page,
    Card::Martyr,
    Card::Sniper,
    Card::Horseman,
    Card::Siren,
];

impl Card {
    /// Every archetype in ordinal order.
    pub const ALL: [Card; CARD_COUNT] = [
        Card::Berserker,
        Card::Gladiator,
        Card::Guard,
        Card::Halberder,
        Card::Ninja,
        Card::Shieldbot,
        Card::Spearsman,
        Card::Vampire,
        Card::Wallman,
        Card::Cannonball,
        Card::Horseman,
        Card::Siren,
        Card::Sniper,
        Card::Bowman,
        Card::Dervish,
        Card::Alchemist,
        Card::Hammerman,
        Card::Lanceman,
        Card::MadBomber,
        Card::Mage,
        Card::Nurse,
        Card::Medic,
        Card::Cleric,
        Card::MadScientist,
        Card::Page,
        Card::Shieldmaiden,
        Card::Martyr,
    ];

    /// Look up an archetype by ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Card> {
        Self::ALL.get(ordinal).copied()
    }

    /// Stable 0-based token.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Berserker => "Berserker",
            Card::Gladiator => "Gladiator",
            Card::Guard => "Guard",
            Card::Halberder => "Halberder",
            Card::Ninja => "Ninja",
            Card::Shieldbot => "Shieldbot",
            Card::Spearsman => "Spearsman",
            Card::Vampire => "Vampire",
            Card::Wallman => "Wallman",
            Card::Cannonball => "Cannonball",
            Card::Horseman => "Horseman",
            Card::Siren => "Siren",
            Card::Sniper => "Sniper",
            Card::Bowman => "Bowman",
            Card::Dervish => "Dervish",
            Card::Alchemist => "Alchemist",
            Card::Hammerman => "Hammerman",
            Card::Lanceman => "Lanceman",
            Card::MadBomber => "Mad Bomber",
            Card::Mage => "Mage",
            Card::Nurse => "Nurse",
            Card::Medic => "Medic",
            Card::Cleric => "Cleric",
            Card::MadScientist => "Mad Scientist",
            Card::Page => "Page",
            Card::Shieldmaiden => "Shieldmaiden",
            Card::Martyr => "Martyr",
        }
    }

    /// Starting and maximum HP.
    #[must_use]
    pub const fn max_hp(self) -> i32 {
        match self {
            Card::Wallman => 8,
            Card::Berserker | Card::Gladiator | Card::Guard => 6,
            Card::Spearsman
            | Card::Horseman
            | Card::Dervish
            | Card::Alchemist
            | Card::Hammerman => 5,
            Card::Halberder
            | Card::Shieldbot
            | Card::Vampire
            | Card::Bowman
            | Card::MadScientist
            | Card::Page
            | Card::Shieldmaiden => 4,
            Card::Siren | Card::Lanceman | Card::Nurse | Card::Martyr => 3,
            Card::Medic | Card::Cleric => 2,
            Card::Ninja | Card::Cannonball | Card::Sniper | Card::MadBomber | Card::Mage => 1,
        }
    }

    /// Base attack at full HP.
    ///
    /// A damaged Berserker hits harder; see `CardInstance::attack`.
    #[must_use]
    pub const fn base_attack(self) -> i32 {
        match self {
            Card::Ninja => 8,
            Card::Halberder => 4,
            Card::Spearsman | Card::Vampire => 3,
            Card::Guard
            | Card::Shieldbot
            | Card::Horseman
            | Card::Siren
            | Card::Dervish
            | Card::Lanceman
            | Card::MadBomber => 2,
            Card::Berserker
            | Card::Gladiator
            | Card::Wallman
            | Card::Sniper
            | Card::Bowman
            | Card::Nurse
            | Card::Medic
            | Card::Cleric
            | Card::MadScientist
            | Card::Page
            | Card::Shieldmaiden
            | Card::Martyr => 1,
            Card::Cannonball | Card::Alchemist | Card::Hammerman | Card::Mage => 0,
        }
    }

    /// Ability class of this archetype.
    #[must_use]
    pub const fn ability(self) -> AbilityClass {
        match self {
            Card::Bowman
            | Card::Dervish
            | Card::Alchemist
            | Card::Hammerman
            | Card::Lanceman
            | Card::MadBomber
            | Card::Mage => AbilityClass::AttackSpecial,
            Card::Vampire | Card::Nurse | Card::Medic | Card::Cleric => AbilityClass::HealingSpecial,
            _ => AbilityClass::None,
        }
    }

    /// Is this archetype ever worth drafting into the leading slot?
    #[must_use]
    pub fn is_reasonable_leader(self) -> bool {
        !NEVER_OPTIMAL_LEADING.contains(&self)
    }

    /// Archetypes allowed in the leading slot, in ordinal order.
    pub fn reasonable_leaders() -> impl Iterator<Item = Card> {
        Self::ALL.into_iter().filter(|card| card.is_reasonable_leader())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
