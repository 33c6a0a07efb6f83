//! The player's three card piles and the moves between them.
//!
//! - **deck**: draw pile, drawn from the front
//! - **hand**: cards playable this turn
//! - **discard**: played and swept cards, in the order they arrived
//!
//! Piles are `im::Vector`s so cloning a player (for lookahead or display
//! snapshots) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered deck / hand / discard piles.
///
/// ```
/// use spire_combat::cards::Card;
/// use spire_combat::zones::CardPiles;
///
/// let mut piles = CardPiles::new([Card::Strike, Card::Defend, Card::Bash]);
/// assert_eq!(piles.draw_up_to(2), 2);
/// assert_eq!(piles.hand().len(), 2);
/// assert_eq!(piles.deck().front(), Some(&Card::Bash));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPiles {
    deck: Vector<Card>,
    hand: Vector<Card>,
    discard: Vector<Card>,
}

impl CardPiles {
    /// Create piles with `deck` as the draw pile and empty hand/discard.
    pub fn new(deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Move cards from the front of the deck until the hand holds
    /// `hand_size` cards or the deck runs out. Returns the number drawn.
    ///
    /// The discard pile is never shuffled back in here.
    pub fn draw_up_to(&mut self, hand_size: usize) -> usize {
        let mut drawn = 0;
        while self.hand.len() < hand_size {
            let Some(card) = self.deck.pop_front() else {
                break;
            };
            self.hand.push_back(card);
            drawn += 1;
        }
        drawn
    }

    /// Move the whole hand to the end of the discard pile.
    pub fn sweep_hand(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.discard.append(hand);
    }

    /// Move the discard pile to the end of the deck.
    ///
    /// Only allowed with an empty hand; returns `false` and does nothing
    /// otherwise.
    pub fn recycle_discard(&mut self) -> bool {
        if !self.hand.is_empty() {
            return false;
        }
        let discard = std::mem::take(&mut self.discard);
        self.deck.append(discard);
        true
    }

    /// Index of the first card in hand named `name`.
    #[must_use]
    pub fn find_in_hand(&self, name: &str) -> Option<usize> {
        self.hand.iter().position(|card| card.name() == name)
    }

    /// Move the hand card at `index` to the end of the discard pile.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push_back(card);
        Some(card)
    }
}
