//! The player character.
//!
//! ## Player
//!
//! A [`Combatant`] plus energy and the deck / hand / discard piles.
//! The player outlives every encounter: piles and HP carry over.
//!
//! ## Character
//!
//! Preset characters with their starting HP and deck.

use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::config::TurnRules;
use crate::cards::Card;
use crate::zones::CardPiles;

/// Preset player characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    /// 80 HP; 5 Strike, 4 Defend, 1 Bash.
    IronClad,
    /// 70 HP; 5 Strike, 5 Defend, 1 Neutralize, 1 Survivor.
    Silent,
}

impl Character {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::IronClad => "IronClad",
            Character::Silent => "Silent",
        }
    }

    #[must_use]
    pub const fn max_hp(self) -> i32 {
        match self {
            Character::IronClad => 80,
            Character::Silent => 70,
        }
    }

    /// Starting deck, front card first.
    #[must_use]
    pub fn starting_deck(self) -> Vec<Card> {
        let mut deck = vec![Card::Strike; 5];
        match self {
            Character::IronClad => {
                deck.extend([Card::Defend; 4]);
                deck.push(Card::Bash);
            }
            Character::Silent => {
                deck.extend([Card::Defend; 5]);
                deck.push(Card::Neutralize);
                deck.push(Card::Survivor);
            }
        }
        deck
    }
}

/// The player character's full state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    combatant: Combatant,
    energy: i32,
    piles: CardPiles,
    rules: TurnRules,
}

impl Player {
    /// Create a player with `deck` as the draw pile and default turn rules.
    pub fn new(name: impl Into<String>, max_hp: i32, deck: impl IntoIterator<Item = Card>) -> Self {
        let rules = TurnRules::default();
        Self {
            combatant: Combatant::new(name, max_hp),
            energy: rules.energy_per_turn,
            piles: CardPiles::new(deck),
            rules,
        }
    }

    /// Create a preset character.
    #[must_use]
    pub fn from_character(character: Character) -> Self {
        Self::new(character.name(), character.max_hp(), character.starting_deck())
    }

    /// Replace the turn rules (energy per turn, hand size).
    #[must_use]
    pub fn with_turn_rules(mut self, rules: TurnRules) -> Self {
        self.rules = rules;
        self.energy = rules.energy_per_turn;
        self
    }

    #[must_use]
    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    #[must_use]
    pub const fn energy(&self) -> i32 {
        self.energy
    }

    #[must_use]
    pub const fn turn_rules(&self) -> TurnRules {
        self.rules
    }

    #[must_use]
    pub fn piles(&self) -> &CardPiles {
        &self.piles
    }

    #[must_use]
    pub fn deck(&self) -> &im::Vector<Card> {
        self.piles.deck()
    }

    #[must_use]
    pub fn hand(&self) -> &im::Vector<Card> {
        self.piles.hand()
    }

    #[must_use]
    pub fn discard(&self) -> &im::Vector<Card> {
        self.piles.discard()
    }

    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.combatant.is_defeated()
    }

    /// Refill the hand from the front of the deck. May stop short.
    pub fn draw_hand(&mut self) -> usize {
        self.piles.draw_up_to(self.rules.hand_size)
    }

    /// Put the discard pile back under the deck.
    ///
    /// The hand must be empty; otherwise nothing moves.
    pub fn prepare_new_encounter(&mut self) {
        if !self.piles.recycle_discard() {
            tracing::warn!(
                hand = self.piles.hand().len(),
                "hand not empty at encounter start, discard pile left in place"
            );
        }
    }

    /// Sweep the hand into the discard pile.
    pub fn end_turn(&mut self) {
        self.piles.sweep_hand();
    }

    /// Restore energy, draw a new hand, then decay statuses.
    pub fn start_new_turn(&mut self) {
        self.energy = self.rules.energy_per_turn;
        let drawn = self.draw_hand();
        self.combatant.advance_turn();
        tracing::trace!(drawn, hand = self.piles.hand().len(), "player turn started");
    }

    /// Play the first card in hand named `name`.
    ///
    /// Returns `None` without changing anything if no such card is in hand
    /// or it costs more energy than the player has.
    pub fn play_card(&mut self, name: &str) -> Option<Card> {
        let index = self.piles.find_in_hand(name)?;
        let cost = self.piles.hand()[index].energy_cost();
        if self.energy < cost {
            return None;
        }
        let card = self.piles.discard_from_hand(index)?;
        self.energy -= cost;
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_presets() {
        let ironclad = Player::from_character(Character::IronClad);
        assert_eq!(ironclad.combatant().max_hp(), 80);
        assert_eq!(ironclad.combatant().name(), "IronClad");
        assert_eq!(ironclad.deck().len(), 10);
        assert_eq!(ironclad.deck().back(), Some(&Card::Bash));

        let silent = Player::from_character(Character::Silent);
        assert_eq!(silent.combatant().max_hp(), 70);
        assert_eq!(silent.deck().len(), 12);
        assert_eq!(
            silent.deck().iter().filter(|c| **c == Card::Defend).count(),
            5
        );
        assert_eq!(silent.deck().back(), Some(&Card::Survivor));
    }

    #[test]
    fn test_start_new_turn() {
        let mut player = Player::from_character(Character::IronClad);
        player.combatant_mut().add_block(10);
        player.combatant_mut().add_weak(2);

        player.start_new_turn();

        assert_eq!(player.energy(), 3);
        assert_eq!(player.hand().len(), 5);
        assert_eq!(player.deck().len(), 5);
        assert_eq!(player.combatant().block(), 0);
        assert_eq!(player.combatant().weak(), 1);
    }

    #[test]
    fn test_short_draw() {
        let mut player = Player::new("Tester", 10, [Card::Strike, Card::Defend]);
        player.start_new_turn();
        assert_eq!(player.hand().len(), 2);
        assert!(player.deck().is_empty());
    }

    #[test]
    fn test_play_card_deducts_energy() {
        let mut player = Player::new("Tester", 10, [Card::Bash, Card::Strike]);
        player.start_new_turn();

        assert_eq!(player.play_card("Bash"), Some(Card::Bash));
        assert_eq!(player.energy(), 1);
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.discard().len(), 1);
    }

    #[test]
    fn test_play_card_insufficient_energy() {
        let mut player = Player::new("Tester", 10, [Card::Strike, Card::Bash]);
        player.start_new_turn();
        player.play_card("Strike");
        player.play_card("Strike"); // not in hand anymore
        assert_eq!(player.energy(), 2);

        let mut poor = Player::new("Tester", 10, [Card::Bash])
            .with_turn_rules(TurnRules { energy_per_turn: 1, hand_size: 5 });
        poor.start_new_turn();

        let before = poor.clone();
        assert_eq!(poor.play_card("Bash"), None);
        assert_eq!(poor, before);
    }

    #[test]
    fn test_play_card_first_match() {
        let mut player = Player::new("Tester", 10, [Card::Defend, Card::Strike, Card::Defend]);
        player.start_new_turn();

        player.play_card("Defend");
        let hand: Vec<_> = player.hand().iter().copied().collect();
        assert_eq!(hand, vec![Card::Strike, Card::Defend]);
    }

    #[test]
    fn test_encounter_cycle() {
        let mut player = Player::from_character(Character::IronClad);
        player.start_new_turn();
        player.play_card("Strike");
        player.end_turn();

        assert!(player.hand().is_empty());
        assert_eq!(player.discard().len(), 5);

        player.prepare_new_encounter();
        assert_eq!(player.deck().len(), 10);
        assert!(player.discard().is_empty());
        // Discarded cards go to the end, in discard order
        assert_eq!(player.deck()[5], Card::Strike);
    }

    #[test]
    fn test_prepare_with_cards_in_hand_is_noop() {
        let mut player = Player::from_character(Character::Silent);
        player.start_new_turn();
        player.play_card("Strike");

        let before = player.clone();
        player.prepare_new_encounter();
        assert_eq!(player, before);
    }
}
