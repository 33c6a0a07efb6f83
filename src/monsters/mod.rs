//! Monsters and their action strategies.
//!
//! ## Key Types
//!
//! - `Strategy`: FixedRoll / Escalating / Reactive behavior with hidden state
//! - `ActionEffect`: what an action does to the player
//! - `MonsterKind`: Louse, Cultist, JawWorm
//! - `MonsterSpec`: `(type name, max HP)` descriptor from an encounter plan
//! - `Monster`: live monster with id, combat state and strategy
//! - `MonsterFactory`: spawns monsters with unique ids
//! - `SpawnError`: a spec the factory refuses

pub mod factory;
pub mod monster;
pub mod strategy;

pub use factory::{MonsterFactory, SpawnError};
pub use monster::{Monster, MonsterKind, MonsterSpec, UnknownMonster};
pub use strategy::{ActionEffect, Intent, Strategy};
