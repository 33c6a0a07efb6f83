//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its damage,
//! block, cost, status grants and whether it needs a target. `Card` is the
//! closed set of playable cards; each variant maps to one definition.
//!
//! ```
//! use spire_combat::cards::Card;
//!
//! let bash: Card = "Bash".parse().unwrap();
//! assert_eq!(bash.damage(), 7);
//! assert_eq!(bash.energy_cost(), 2);
//! assert_eq!(bash.to_string(), "Bash: Deal 7 damage. Gain 5 block.");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::StatusGrants;

/// Name did not match any card.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown card: {0}")]
pub struct UnknownCard(pub String);

/// Static card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Damage dealt to the target.
    pub damage: i32,
    /// Block added to the player.
    pub block: i32,
    pub energy_cost: i32,
    /// Strength goes to the player; weak and vulnerable go to the target.
    pub status: StatusGrants,
    pub requires_target: bool,
}

const STRIKE: CardDefinition = CardDefinition {
    name: "Strike",
    description: "Deal 6 damage.",
    damage: 6,
    block: 0,
    energy_cost: 1,
    status: StatusGrants::NONE,
    requires_target: true,
};

const DEFEND: CardDefinition = CardDefinition {
    name: "Defend",
    description: "Gain 5 block.",
    damage: 0,
    block: 5,
    energy_cost: 1,
    status: StatusGrants::NONE,
    requires_target: false,
};

const BASH: CardDefinition = CardDefinition {
    name: "Bash",
    description: "Deal 7 damage. Gain 5 block.",
    damage: 7,
    block: 5,
    energy_cost: 2,
    status: StatusGrants::NONE,
    requires_target: true,
};

const NEUTRALIZE: CardDefinition = CardDefinition {
    name: "Neutralize",
    description: "Deal 3 damage. Apply 1 weak. Apply 2 vulnerable.",
    damage: 3,
    block: 0,
    energy_cost: 0,
    status: StatusGrants {
        strength: 0,
        weak: 1,
        vulnerable: 2,
    },
    requires_target: true,
};

const SURVIVOR: CardDefinition = CardDefinition {
    name: "Survivor",
    description: "Gain 8 block and 1 strength.",
    damage: 0,
    block: 8,
    energy_cost: 1,
    status: StatusGrants {
        strength: 1,
        weak: 0,
        vulnerable: 0,
    },
    requires_target: false,
};

/// A playable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Strike,
    Defend,
    Bash,
    Neutralize,
    Survivor,
}

impl Card {
    /// Every card, in definition order.
    pub const ALL: [Card; 5] = [
        Card::Strike,
        Card::Defend,
        Card::Bash,
        Card::Neutralize,
        Card::Survivor,
    ];

    /// Static data for this card.
    #[must_use]
    pub const fn definition(self) -> &'static CardDefinition {
        match self {
            Card::Strike => &STRIKE,
            Card::Defend => &DEFEND,
            Card::Bash => &BASH,
            Card::Neutralize => &NEUTRALIZE,
            Card::Survivor => &SURVIVOR,
        }
    }

    /// Look a card up by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Card> {
        Card::ALL.into_iter().find(|card| card.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        self.definition().description
    }

    #[must_use]
    pub const fn damage(self) -> i32 {
        self.definition().damage
    }

    #[must_use]
    pub const fn block(self) -> i32 {
        self.definition().block
    }

    #[must_use]
    pub const fn energy_cost(self) -> i32 {
        self.definition().energy_cost
    }

    #[must_use]
    pub const fn status_grants(self) -> StatusGrants {
        self.definition().status
    }

    #[must_use]
    pub const fn requires_target(self) -> bool {
        self.definition().requires_target
    }
}

impl FromStr for Card {
    type Err = UnknownCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_name(s).ok_or_else(|| UnknownCard(s.to_string()))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name(), self.description())
    }
}
