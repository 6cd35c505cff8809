//! Turn-by-turn battle resolution.
//!
//! A battle is a pure function of the two lineups. Each turn runs:
//!
//! 1. base attacks (with support/glass-cannon modifiers and reflect)
//! 2. frontline special attacks
//! 3. sniper shots at the opposing last rank
//! 4. kill removal, ending the battle if a side is empty
//! 5. healing
//!
//! Before the first turn every sacrifice is removed together with the
//! opposing card at the same rank. A stalemate guard drops both frontlines
//! after `STALEMATE_TURNS` consecutive turns in which no deck changed size.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardInstance};
use crate::core::Player;

use super::abilities::{attack_pattern, healing_phase};
use super::damage::strike;
use super::deck::Deck;
use super::lineup::battle_order;

/// Consecutive turns without a size change before both frontlines are removed.
pub const STALEMATE_TURNS: u32 = 10;

/// Outcome of a resolved battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Player1Won,
    Player2Won,
    Draw,
}

impl BattleResult {
    /// The same outcome seen with the sides swapped.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            BattleResult::Player1Won => BattleResult::Player2Won,
            BattleResult::Player2Won => BattleResult::Player1Won,
            BattleResult::Draw => BattleResult::Draw,
        }
    }

    /// Winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            BattleResult::Player1Won => Some(Player::Player1),
            BattleResult::Player2Won => Some(Player::Player2),
            BattleResult::Draw => None,
        }
    }
}

/// Both boards at one point of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub player1: Vec<CardInstance>,
    pub player2: Vec<CardInstance>,
}

/// A battle in progress.
#[derive(Clone, Debug)]
pub struct Battle {
    decks: [Deck; 2],
    turn: u32,
}

impl Battle {
    /// Start a battle between two decks already in rank order.
    ///
    /// # Panics
    ///
    /// Panics if either deck is empty: the battle would already be over.
    #[must_use]
    pub fn new(player1: Deck, player2: Deck) -> Self {
        assert!(
            !player1.is_empty() && !player2.is_empty(),
            "battle is already finished"
        );
        Self {
            decks: [player1, player2],
            turn: 1,
        }
    }

    /// Start a battle from the two draft sequences.
    #[must_use]
    pub fn from_draft(player1: &[Card], player2: &[Card]) -> Self {
        let (lineup1, lineup2) = battle_order(player1, player2);
        Self::new(Deck::from_cards(lineup1), Deck::from_cards(lineup2))
    }

    /// The deck of one side.
    #[must_use]
    pub fn deck(&self, player: Player) -> &Deck {
        &self.decks[player.index()]
    }

    /// Copy of both boards.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            player1: self.decks[0].snapshot(),
            player2: self.decks[1].snapshot(),
        }
    }

    /// Play until a side is empty.
    pub fn run(mut self) -> BattleResult {
        self.play_out(|_| {})
    }

    /// Play until a side is empty, recording the boards before the battle,
    /// after the sacrifice phase if it removed any card, and after every
    /// turn.
    pub fn run_with_summary(mut self) -> (BattleResult, Vec<BoardSnapshot>) {
        let mut snapshots = Vec::new();
        let result = self.play_out(|battle| snapshots.push(battle.snapshot()));
        (result, snapshots)
    }

    fn play_out(&mut self, mut observe: impl FnMut(&Battle)) -> BattleResult {
        assert!(!self.is_finished(), "battle is already finished");
        observe(self);

        let before = self.sizes();
        self.sacrifice_phase();
        let mut sizes = self.sizes();
        if sizes != before {
            observe(self);
        }

        let mut quiet_turns = 0;
        while !self.is_finished() {
            self.play_turn();

            if self.sizes() == sizes {
                quiet_turns += 1;
            } else {
                quiet_turns = 0;
                sizes = self.sizes();
            }

            if quiet_turns >= STALEMATE_TURNS {
                trace!("stalemate on turn {}, removing both frontlines", self.turn);
                for deck in &mut self.decks {
                    deck.remove_rank(1);
                }
                quiet_turns = 0;
            }

            observe(self);
        }

        self.outcome()
    }

    fn is_finished(&self) -> bool {
        self.decks.iter().any(Deck::is_empty)
    }

    fn sizes(&self) -> (usize, usize) {
        (self.decks[0].ranks(), self.decks[1].ranks())
    }

    fn outcome(&self) -> BattleResult {
        match (self.decks[0].is_empty(), self.decks[1].is_empty()) {
            (true, true) => BattleResult::Draw,
            (false, true) => BattleResult::Player1Won,
            (true, false) => BattleResult::Player2Won,
            (false, false) => panic!("battle has no outcome yet"),
        }
    }

    /// `(own, opposing)` decks for one side.
    fn sides_mut(&mut self, player: Player) -> (&mut Deck, &mut Deck) {
        let [deck1, deck2] = &mut self.decks;
        match player {
            Player::Player1 => (deck1, deck2),
            Player::Player2 => (deck2, deck1),
        }
    }

    /// Each side's first sacrifice takes the opposing card at its rank with it.
    /// Player 2's sacrifice is located after player 1's has been removed.
    fn sacrifice_phase(&mut self) {
        for player in Player::ALL {
            let Some(rank) = self.deck(player).rank_of(Card::Cannonball) else {
                continue;
            };
            for deck in &mut self.decks {
                if rank <= deck.ranks() {
                    deck.remove_rank(rank);
                }
            }
        }
    }

    fn play_turn(&mut self) {
        self.base_attacks();
        self.special_attacks();
        self.sniper_shots();

        let killed: usize = self.decks.iter_mut().map(Deck::remove_killed).sum();
        if killed > 0 {
            trace!("turn {}: {killed} card(s) killed", self.turn);
        }
        if self.is_finished() {
            return;
        }

        for deck in &mut self.decks {
            healing_phase(deck);
        }
        self.turn += 1;
    }

    fn base_attacks(&mut self) {
        let [deck1, deck2] = &mut self.decks;
        let attack1 = frontline_attack(deck1);
        let attack2 = frontline_attack(deck2);

        strike(deck2, 1, attack1);
        strike(deck1, 1, attack2);

        if deck1.is_at(1, Card::Gladiator) {
            strike(deck2, 1, (attack2 + 1) / 2);
        }
        if deck2.is_at(1, Card::Gladiator) {
            strike(deck1, 1, (attack1 + 1) / 2);
        }
    }

    /// Hits on the opposing deck land for both sides before any side hits
    /// itself, so swapping the two sides mirrors the result exactly.
    fn special_attacks(&mut self) {
        let turn = self.turn;
        let patterns = Player::ALL.map(|player| attack_pattern(self.deck(player)[1].card));

        for player in Player::ALL {
            if let Some(pattern) = patterns[player.index()] {
                let (_, opposing) = self.sides_mut(player);
                pattern.hit_opponent(opposing, turn);
            }
        }
        for player in Player::ALL {
            if let Some(pattern) = patterns[player.index()] {
                let (own, _) = self.sides_mut(player);
                pattern.hit_own(own);
            }
        }
    }

    fn sniper_shots(&mut self) {
        for player in Player::ALL {
            let (own, opposing) = self.sides_mut(player);
            if own.contains(Card::Sniper) {
                let last = opposing.ranks();
                strike(opposing, last, 1);
            }
        }
    }
}

/// Frontline attack for this turn, after rank-2 modifiers.
///
/// A glass-cannon support doubles a positive attack and costs the frontline
/// 1 HP, bypassing every damage rule.
fn frontline_attack(deck: &mut Deck) -> i32 {
    let mut attack = deck[1].attack();
    if deck.is_at(2, Card::Page) {
        attack += 1;
    } else if attack > 0 && deck.is_at(2, Card::MadScientist) {
        attack *= 2;
        deck[1].current_hp -= 1;
    }
    attack
}

/// Resolve a battle between two draft sequences.
#[must_use]
pub fn resolve(player1: &[Card], player2: &[Card]) -> BattleResult {
    Battle::from_draft(player1, player2).run()
}

/// Resolve a battle and return every intermediate board, index 0 being the
/// boards before anything happens. A sacrifice that removes cards gets its
/// own board before the first turn.
#[must_use]
pub fn resolve_with_summary(player1: &[Card], player2: &[Card]) -> (BattleResult, Vec<BoardSnapshot>) {
    Battle::from_draft(player1, player2).run_with_summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(deck: &[CardInstance]) -> Vec<(Card, i32)> {
        deck.iter().map(|c| (c.card, c.current_hp)).collect()
    }

    #[test]
    fn test_redirect_on_first_turn() {
        let battle = Battle::new(
            Deck::from_cards([Card::Halberder, Card::Page]),
            Deck::from_cards([Card::Wallman, Card::Martyr, Card::Spearsman]),
        );

        let (_, snapshots) = battle.run_with_summary();

        // The Martyr took the full 5 and was removed; the Wallman is untouched.
        assert_eq!(
            board(&snapshots[1].player2),
            vec![(Card::Wallman, 8), (Card::Spearsman, 5)]
        );
    }

    #[test]
    fn test_mirror_draw() {
        let deck = [Card::Spearsman; 6];
        assert_eq!(resolve(&deck, &deck), BattleResult::Draw);
    }

    #[test]
    fn test_shield_absorbs_ninja() {
        let battle = Battle::new(Deck::from_cards([Card::Ninja]), Deck::from_cards([Card::Shieldbot]));

        let (result, snapshots) = battle.run_with_summary();

        assert_eq!(result, BattleResult::Player2Won);
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].player2[0].shield_up);
        assert!(snapshots[1].player1.is_empty());
        assert_eq!(snapshots[1].player2[0].current_hp, 4);
        assert!(!snapshots[1].player2[0].shield_up);
    }

    #[test]
    fn test_gladiator_reflects_half() {
        let battle = Battle::new(Deck::from_cards([Card::Gladiator]), Deck::from_cards([Card::Halberder]));

        let (result, snapshots) = battle.run_with_summary();

        assert_eq!(board(&snapshots[1].player1), vec![(Card::Gladiator, 2)]);
        assert_eq!(board(&snapshots[1].player2), vec![(Card::Halberder, 1)]);
        assert_eq!(result, BattleResult::Draw);
    }

    #[test]
    fn test_mad_scientist_doubles_and_burns() {
        let battle = Battle::new(
            Deck::from_cards([Card::Spearsman, Card::MadScientist]),
            Deck::from_cards([Card::Wallman]),
        );

        let (result, snapshots) = battle.run_with_summary();

        assert_eq!(
            board(&snapshots[1].player1),
            vec![(Card::Spearsman, 3), (Card::MadScientist, 4)]
        );
        assert_eq!(board(&snapshots[1].player2), vec![(Card::Wallman, 2)]);
        assert_eq!(result, BattleResult::Player1Won);
    }

    #[test]
    fn test_sacrifice_takes_opposing_rank() {
        let mut battle = Battle::new(
            Deck::from_cards([Card::Ninja, Card::Cannonball, Card::Wallman]),
            Deck::from_cards([Card::Guard, Card::Spearsman, Card::Bowman]),
        );

        battle.sacrifice_phase();

        let p1: Vec<_> = battle.deck(Player::Player1).iter().map(|c| c.card).collect();
        let p2: Vec<_> = battle.deck(Player::Player2).iter().map(|c| c.card).collect();
        assert_eq!(p1, vec![Card::Ninja, Card::Wallman]);
        assert_eq!(p2, vec![Card::Guard, Card::Bowman]);
    }

    #[test]
    fn test_sacrifice_recorded_in_summary() {
        let (result, snapshots) = resolve_with_summary(&[Card::Cannonball], &[Card::Shieldbot]);

        assert_eq!(result, BattleResult::Draw);
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[1].player1.is_empty());
        assert!(snapshots[1].player2.is_empty());

        let (_, snapshots) = resolve_with_summary(
            &[Card::Wallman, Card::Cannonball],
            &[Card::Wallman, Card::Bowman],
        );
        assert_eq!(board(&snapshots[1].player1), vec![(Card::Wallman, 8)]);
        assert_eq!(board(&snapshots[1].player2), vec![(Card::Wallman, 8)]);
    }

    #[test]
    fn test_second_sacrifice_located_after_first() {
        let battle = Battle::new(
            Deck::from_cards([Card::Cannonball, Card::Ninja]),
            Deck::from_cards([Card::Wallman, Card::Cannonball, Card::Guard]),
        );

        assert_eq!(battle.run(), BattleResult::Player2Won);
    }

    #[test]
    fn test_stalemate_guard_drops_frontlines() {
        let deck = [Card::Wallman, Card::Nurse];
        let (result, snapshots) = resolve_with_summary(&deck, &deck);

        assert_eq!(result, BattleResult::Draw);
        assert_eq!(snapshots[STALEMATE_TURNS as usize - 1].player1.len(), 2);
        assert_eq!(board(&snapshots[STALEMATE_TURNS as usize].player1), vec![(Card::Nurse, 3)]);
        assert_eq!(snapshots.len(), 14);
    }

    #[test]
    fn test_sniper_hits_last_rank() {
        let battle = Battle::new(
            Deck::from_cards([Card::Wallman, Card::Sniper]),
            Deck::from_cards([Card::Wallman, Card::Martyr]),
        );

        let (_, snapshots) = battle.run_with_summary();

        // The base attack is redirected onto the Martyr, which is also the sniper's target.
        assert_eq!(
            board(&snapshots[1].player2),
            vec![(Card::Wallman, 8), (Card::Martyr, 1)]
        );
        assert_eq!(
            board(&snapshots[1].player1),
            vec![(Card::Wallman, 7), (Card::Sniper, 1)]
        );
    }

    #[test]
    fn test_mirrored_result() {
        assert_eq!(BattleResult::Player1Won.mirrored(), BattleResult::Player2Won);
        assert_eq!(BattleResult::Draw.mirrored(), BattleResult::Draw);
        assert_eq!(BattleResult::Player2Won.winner(), Some(Player::Player2));
    }

    #[test]
    #[should_panic(expected = "already finished")]
    fn test_empty_deck_panics() {
        let _ = Battle::new(Deck::default(), Deck::from_cards([Card::Ninja]));
    }
}
