//! Combat configuration types.
//!
//! The numeric rules of combat live here rather than in the engine:
//! - `TurnRules`: energy and hand size at the start of each player turn
//! - `DamageModifiers`: vulnerable / weak multipliers
//! - `DamageRange`: roll range for fixed-roll monsters
//! - `CombatConfig`: combines all configuration
//!
//! `CombatConfig::default()` reproduces the standard rules.

use serde::{Deserialize, Serialize};

/// Invalid combat configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Hand size of zero would make every turn empty.
    #[error("hand size must be at least 1")]
    EmptyHand,

    /// Negative energy per turn.
    #[error("energy per turn must be non-negative, got {0}")]
    NegativeEnergy(i32),

    /// Multiplier is negative, NaN, or infinite.
    #[error("{name} multiplier must be a finite non-negative number, got {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    /// Roll range is inverted or negative.
    #[error("damage range {min}..={max} is invalid")]
    InvalidRange { min: i32, max: i32 },

    /// Negative base damage for escalating monsters.
    #[error("escalating base damage must be non-negative, got {0}")]
    NegativeBaseDamage(i32),
}

/// Per-turn resources granted to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRules {
    /// Energy restored at the start of each player turn.
    pub energy_per_turn: i32,

    /// Cards the hand is refilled to at the start of each player turn.
    pub hand_size: usize,
}

impl Default for TurnRules {
    fn default() -> Self {
        Self {
            energy_per_turn: 3,
            hand_size: 5,
        }
    }
}

/// Multipliers applied by the damage formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageModifiers {
    /// Applied when the defender is vulnerable.
    pub vulnerable: f64,

    /// Applied when the attacker is weak.
    pub weak: f64,
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self {
            vulnerable: 1.5,
            weak: 0.75,
        }
    }
}

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

impl DamageRange {
    /// Create a new inclusive range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Complete combat configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Player turn resources.
    pub turn: TurnRules,

    /// Vulnerable / weak multipliers.
    pub damage: DamageModifiers,

    /// Damage range rolled once by each fixed-roll monster (Louse).
    pub fixed_roll_damage: DamageRange,

    /// Base damage of escalating monsters (Cultist) from their second action on.
    pub escalating_base_damage: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            turn: TurnRules::default(),
            damage: DamageModifiers::default(),
            fixed_roll_damage: DamageRange::new(5, 7),
            escalating_base_damage: 6,
        }
    }
}

impl CombatConfig {
    /// Set the player turn resources.
    #[must_use]
    pub fn with_turn_rules(mut self, turn: TurnRules) -> Self {
        self.turn = turn;
        self
    }

    /// Set the damage multipliers.
    #[must_use]
    pub fn with_damage_modifiers(mut self, damage: DamageModifiers) -> Self {
        self.damage = damage;
        self
    }

    /// Set the fixed-roll damage range.
    #[must_use]
    pub fn with_fixed_roll_damage(mut self, min: i32, max: i32) -> Self {
        self.fixed_roll_damage = DamageRange::new(min, max);
        self
    }

    /// Set the escalating base damage.
    #[must_use]
    pub fn with_escalating_base_damage(mut self, base: i32) -> Self {
        self.escalating_base_damage = base;
        self
    }

    /// Check every field for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.turn.energy_per_turn < 0 {
            return Err(ConfigError::NegativeEnergy(self.turn.energy_per_turn));
        }
        for (name, value) in [
            ("vulnerable", self.damage.vulnerable),
            ("weak", self.damage.weak),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMultiplier { name, value });
            }
        }
        let range = self.fixed_roll_damage;
        if range.min < 0 || range.min > range.max {
            return Err(ConfigError::InvalidRange {
                min: range.min,
                max: range.max,
            });
        }
        if self.escalating_base_damage < 0 {
            return Err(ConfigError::NegativeBaseDamage(self.escalating_base_damage));
        }
        Ok(())
    }
}
