//! Draft order to battle order.
//!
//! Both sides pick one card per round. A pick normally joins at the back,
//! but a Horseman (or any pick made while the opponent drafts a Siren) slips
//! in ahead of the side's current last rank.

use smallvec::SmallVec;

use crate::cards::{Card, DECK_SIZE};

/// Cards in battle rank order (index 0 = rank 1).
pub type Lineup = SmallVec<[Card; DECK_SIZE]>;

/// Build both battle lineups from the two sides' draft sequences.
///
/// # Panics
///
/// Panics if the two sequences differ in length: picks are made in
/// simultaneous rounds.
#[must_use]
pub fn battle_order(player1: &[Card], player2: &[Card]) -> (Lineup, Lineup) {
    assert_eq!(
        player1.len(),
        player2.len(),
        "draft sequences must have the same number of rounds"
    );

    let mut lineup1 = Lineup::new();
    let mut lineup2 = Lineup::new();
    for (&pick1, &pick2) in player1.iter().zip(player2) {
        add_rank(&mut lineup1, pick1, pick2);
        add_rank(&mut lineup2, pick2, pick1);
    }

    (lineup1, lineup2)
}

fn add_rank(lineup: &mut Lineup, pick: Card, opponent_pick: Card) {
    let jumps_ahead = pick == Card::Horseman || opponent_pick == Card::Siren;
    if jumps_ahead && !lineup.is_empty() {
        lineup.insert(lineup.len() - 1, pick);
    } else {
        lineup.push(pick);
    }
}
