//! Core engine types: combatants, the player, status rules, ids, RNG, configuration.
//!
//! Everything here is independent of specific encounters and monster behavior.

pub mod combatant;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;
pub mod status;

pub use combatant::Combatant;
pub use config::{CombatConfig, ConfigError, DamageModifiers, DamageRange, TurnRules};
pub use entity::{MonsterId, MonsterIdAllocator};
pub use player::{Character, Player};
pub use rng::{GameRng, GameRngState};
pub use status::{scaled_damage, StatusGrants};
