//! Monsters: kinds, spawn descriptors and runtime instances.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::strategy::{ActionEffect, Strategy};
use crate::core::{Combatant, MonsterId};

/// Type name did not match any monster kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown monster type: {0}")]
pub struct UnknownMonster(pub String);

/// Monster types and the strategy each one uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Fixed-roll attacker.
    Louse,
    /// Escalating attacker that alternates weak.
    Cultist,
    /// Reacts to damage taken.
    JawWorm,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Louse, MonsterKind::Cultist, MonsterKind::JawWorm];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Louse => "Louse",
            MonsterKind::Cultist => "Cultist",
            MonsterKind::JawWorm => "JawWorm",
        }
    }
}

impl FromStr for MonsterKind {
    type Err = UnknownMonster;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonsterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownMonster(s.to_string()))
    }
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One monster of an encounter plan: `(type name, max HP)`.
///
/// The type name is kept as a string so plans can be loaded as-is and
/// checked later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub kind: String,
    pub max_hp: i32,
}

impl MonsterSpec {
    pub fn new(kind: impl Into<String>, max_hp: i32) -> Self {
        Self {
            kind: kind.into(),
            max_hp,
        }
    }

    /// Resolve the type name.
    pub fn kind(&self) -> Result<MonsterKind, UnknownMonster> {
        self.kind.parse()
    }
}

impl From<(&str, i32)> for MonsterSpec {
    fn from((kind, max_hp): (&str, i32)) -> Self {
        Self::new(kind, max_hp)
    }
}

/// A monster taking part in an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    id: MonsterId,
    kind: MonsterKind,
    combatant: Combatant,
    strategy: Strategy,
}

impl Monster {
    /// Create a monster at full HP. The combatant is named after `kind`.
    #[must_use]
    pub fn new(id: MonsterId, kind: MonsterKind, max_hp: i32, strategy: Strategy) -> Self {
        Self {
            id,
            kind,
            combatant: Combatant::new(kind.name(), max_hp),
            strategy,
        }
    }

    #[must_use]
    pub const fn id(&self) -> MonsterId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> MonsterKind {
        self.kind
    }

    #[must_use]
    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    /// Current strategy state.
    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.combatant.is_defeated()
    }

    /// Take this turn's action.
    ///
    /// Commits any self-targeted part of the action (block) and advances
    /// the strategy state, then returns the effect on the player.
    pub fn act(&mut self) -> ActionEffect {
        let intent = self.strategy.evaluate(&self.combatant);
        if let Some(block) = intent.self_block {
            self.combatant.set_block(block);
        }
        self.strategy = intent.next;
        intent.effect
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.combatant, f)
    }
}
