//! Special attack and healing patterns, one table entry per archetype.
//!
//! The lookups are exhaustive matches over `Card`, so an archetype tagged
//! with an ability class but lacking a pattern cannot compile.

use crate::cards::Card;

use super::damage::strike;
use super::deck::Deck;

/// Multi-target pattern fired by a frontline attack-special card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackPattern {
    /// 3 to the defender's rank 2.
    Volley,
    /// 3 to the attacker's own rank 2 and 3 to the defender's rank 2.
    Whirl,
    /// 2 to the defender's frontline on odd turns, 4 on even turns.
    Transmute,
    /// Half the defender frontline's max HP (rounded up) to the frontline.
    Crush,
    /// 1 to the defender's ranks 2 and 3.
    Pierce,
    /// 1 to every rank of both decks, back to front.
    Blast,
    /// 3 to the defender's frontline and 2 to its ranks 2 and 3.
    Fireball,
}

/// Healing pattern applied during the healing phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealPattern {
    /// Heal itself by 1, only while in the frontline.
    Drain,
    /// Heal both neighbours by 1.
    Neighbours,
    /// Heal the first wounded card scanning from the front.
    FirstWoundedFromFront,
    /// Heal the first wounded card scanning from the back.
    FirstWoundedFromBack,
}

/// Attack pattern for an archetype, if it has one.
#[must_use]
pub const fn attack_pattern(card: Card) -> Option<AttackPattern> {
    match card {
        Card::Bowman => Some(AttackPattern::Volley),
        Card::Dervish => Some(AttackPattern::Whirl),
        Card::Alchemist => Some(AttackPattern::Transmute),
        Card::Hammerman => Some(AttackPattern::Crush),
        Card::Lanceman => Some(AttackPattern::Pierce),
        Card::MadBomber => Some(AttackPattern::Blast),
        Card::Mage => Some(AttackPattern::Fireball),
        Card::Berserker
        | Card::Gladiator
        | Card::Guard
        | Card::Halberder
        | Card::Ninja
        | Card::Shieldbot
        | Card::Spearsman
        | Card::Vampire
        | Card::Wallman
        | Card::Cannonball
        | Card::Horseman
        | Card::Siren
        | Card::Sniper
        | Card::Nurse
        | Card::Medic
        | Card::Cleric
        | Card::MadScientist
        | Card::Page
        | Card::Shieldmaiden
        | Card::Martyr => None,
    }
}

/// Healing pattern for an archetype, if it has one.
#[must_use]
pub const fn heal_pattern(card: Card) -> Option<HealPattern> {
    match card {
        Card::Vampire => Some(HealPattern::Drain),
        Card::Nurse => Some(HealPattern::Neighbours),
        Card::Medic => Some(HealPattern::FirstWoundedFromFront),
        Card::Cleric => Some(HealPattern::FirstWoundedFromBack),
        Card::Berserker
        | Card::Gladiator
        | Card::Guard
        | Card::Halberder
        | Card::Ninja
        | Card::Shieldbot
        | Card::Spearsman
        | Card::Wallman
        | Card::Cannonball
        | Card::Horseman
        | Card::Siren
        | Card::Sniper
        | Card::Bowman
        | Card::Dervish
        | Card::Alchemist
        | Card::Hammerman
        | Card::Lanceman
        | Card::MadBomber
        | Card::Mage
        | Card::MadScientist
        | Card::Page
        | Card::Shieldmaiden
        | Card::Martyr => None,
    }
}

impl AttackPattern {
    /// The hits this pattern deals to the opposing deck.
    pub fn hit_opponent(self, defender: &mut Deck, turn: u32) {
        match self {
            AttackPattern::Volley => {
                if defender.ranks() > 1 {
                    strike(defender, 2, 3);
                }
            }
            AttackPattern::Whirl => {
                if defender.ranks() > 1 {
                    strike(defender, 2, 3);
                }
            }
            AttackPattern::Transmute => {
                let attack = if turn % 2 == 1 { 2 } else { 4 };
                strike(defender, 1, attack);
            }
            AttackPattern::Crush => {
                let attack = (defender[1].max_hp() + 1) / 2;
                strike(defender, 1, attack);
            }
            AttackPattern::Pierce => {
                for rank in 2..=defender.ranks().min(3) {
                    strike(defender, rank, 1);
                }
            }
            AttackPattern::Blast => blast(defender),
            AttackPattern::Fireball => {
                strike(defender, 1, 3);
                for rank in 2..=defender.ranks().min(3) {
                    strike(defender, rank, 2);
                }
            }
        }
    }

    /// The hits this pattern deals to its own deck.
    pub fn hit_own(self, own: &mut Deck) {
        match self {
            AttackPattern::Whirl => {
                if own.ranks() > 1 {
                    strike(own, 2, 3);
                }
            }
            AttackPattern::Blast => blast(own),
            AttackPattern::Volley
            | AttackPattern::Transmute
            | AttackPattern::Crush
            | AttackPattern::Pierce
            | AttackPattern::Fireball => {}
        }
    }
}

fn blast(deck: &mut Deck) {
    for rank in (1..=deck.ranks()).rev() {
        strike(deck, rank, 1);
    }
}

impl HealPattern {
    /// Apply this pattern for the healer standing at `rank`.
    pub fn apply(self, deck: &mut Deck, rank: usize) {
        match self {
            HealPattern::Drain => {
                if rank == 1 {
                    deck[1].heal(1);
                }
            }
            HealPattern::Neighbours => {
                if rank > 1 {
                    deck[rank - 1].heal(1);
                }
                if rank < deck.ranks() {
                    deck[rank + 1].heal(1);
                }
            }
            HealPattern::FirstWoundedFromFront => {
                if let Some(wounded) = (1..=deck.ranks()).find(|&r| !deck[r].is_full_hp()) {
                    deck[wounded].heal(1);
                }
            }
            HealPattern::FirstWoundedFromBack => {
                if let Some(wounded) = (1..=deck.ranks()).rev().find(|&r| !deck[r].is_full_hp()) {
                    deck[wounded].heal(1);
                }
            }
        }
    }
}

/// Run every healer in rank order, front to back.
pub fn healing_phase(deck: &mut Deck) {
    for rank in 1..=deck.ranks() {
        if let Some(pattern) = heal_pattern(deck[rank].card) {
            pattern.apply(deck, rank);
        }
    }
}
