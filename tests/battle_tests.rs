//! Battle resolver integration tests.
//!
//! Property tests over random drafts plus a few hand-checked matchups.

use proptest::prelude::*;
use proptest::sample::subsequence;
use troop_draft::battle::{battle_order, BattleResult, STALEMATE_TURNS};
use troop_draft::cards::{Card, DECK_SIZE};
use troop_draft::{resolve, resolve_with_summary};

/// A draft of `len` distinct cards in random pick order.
fn draft(len: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(Card::ALL.to_vec(), len).prop_shuffle()
}

/// Two drafts of the same length.
fn matchup() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    (1..=DECK_SIZE).prop_flat_map(|len| (draft(len), draft(len)))
}

proptest! {
    #[test]
    fn test_resolve_is_deterministic((player1, player2) in matchup()) {
        prop_assert_eq!(resolve(&player1, &player2), resolve(&player1, &player2));
    }

    #[test]
    fn test_swapping_sides_mirrors_result((player1, player2) in matchup()) {
        prop_assert_eq!(resolve(&player2, &player1), resolve(&player1, &player2).mirrored());
    }

    #[test]
    fn test_battle_ends_with_an_empty_side((player1, player2) in matchup()) {
        let (result, snapshots) = resolve_with_summary(&player1, &player2);
        let last = snapshots.last().unwrap();

        match result {
            BattleResult::Player1Won => prop_assert!(!last.player1.is_empty() && last.player2.is_empty()),
            BattleResult::Player2Won => prop_assert!(last.player1.is_empty() && !last.player2.is_empty()),
            BattleResult::Draw => prop_assert!(last.player1.is_empty() && last.player2.is_empty()),
        }
        // Every stalemate window removes at least one card from each side.
        prop_assert!(snapshots.len() <= 1 + DECK_SIZE * (STALEMATE_TURNS as usize + 1) * 4);
    }

    #[test]
    fn test_summary_starts_from_full_boards((player1, player2) in matchup()) {
        let (_, snapshots) = resolve_with_summary(&player1, &player2);
        let (lineup1, lineup2) = battle_order(&player1, &player2);
        let first = &snapshots[0];

        let cards1: Vec<Card> = first.player1.iter().map(|c| c.card).collect();
        let cards2: Vec<Card> = first.player2.iter().map(|c| c.card).collect();
        prop_assert_eq!(cards1.as_slice(), lineup1.as_slice());
        prop_assert_eq!(cards2.as_slice(), lineup2.as_slice());
        prop_assert!(first.player1.iter().chain(&first.player2).all(|c| c.current_hp == c.max_hp()));
    }
}

#[test]
fn test_mirror_matches_draw() {
    let decks = [
        [Card::Spearsman, Card::Guard, Card::Page, Card::Bowman, Card::Ninja, Card::Wallman],
        [Card::Mage, Card::Medic, Card::Sniper, Card::Cleric, Card::Nurse, Card::Martyr],
    ];
    for deck in &decks {
        assert_eq!(resolve(deck, deck), BattleResult::Draw);
    }
}

#[test]
fn test_shield_blocks_one_ninja() {
    // The Shieldbot's shield absorbs the first hit entirely.
    let (_, snapshots) = resolve_with_summary(&[Card::Ninja], &[Card::Shieldbot]);
    let shieldbot = &snapshots[1].player2[0];

    assert_eq!(shieldbot.current_hp, shieldbot.max_hp());
    assert!(!shieldbot.shield_up);
}

#[test]
fn test_martyr_takes_the_first_hit() {
    let (_, snapshots) = resolve_with_summary(
        &[Card::Halberder, Card::Page],
        &[Card::Wallman, Card::Martyr],
    );

    let wallman = &snapshots[1].player2[0];
    assert_eq!(wallman.card, Card::Wallman);
    assert_eq!(wallman.current_hp, wallman.max_hp());
}
