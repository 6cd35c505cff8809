//! The single damage rule every attack goes through.
//!
//! Given a nominal target rank and a hit value:
//!
//! 1. A Martyr directly behind the nominal target takes the hit instead.
//! 2. Hits of 0 or less do nothing.
//! 3. A Shieldmaiden behind the struck card reduces the hit by 1 (floor 1).
//! 4. A Guard in the frontline reduces hits on itself by 1 (floor 1).
//! 5. A raised shield absorbs the whole hit and drops; otherwise HP is lost.

use crate::cards::Card;

use super::deck::Deck;

/// Apply a hit of `attack` aimed at `rank` of `defender`.
///
/// # Panics
///
/// Panics if `rank` is not occupied.
pub fn strike(defender: &mut Deck, rank: usize, attack: i32) {
    let target = if defender.is_at(rank + 1, Card::Martyr) {
        rank + 1
    } else {
        rank
    };

    if attack <= 0 {
        return;
    }

    let mut attack = attack;
    if defender.is_at(target + 1, Card::Shieldmaiden) {
        attack = (attack - 1).max(1);
    }
    if target == 1 && defender.is_at(1, Card::Guard) {
        attack = (attack - 1).max(1);
    }

    let struck = &mut defender[target];
    if struck.shield_up {
        struck.shield_up = false;
    } else {
        struck.current_hp -= attack;
    }
}
