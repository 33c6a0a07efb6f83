//! # spire-combat
//!
//! Turn-based combat engine for a deck-building roguelike: one player
//! character with a deck of cards fights groups of monsters.
//!
//! ## Design Principles
//!
//! 1. **Closed Vocabulary**: cards, monster kinds and strategies are enums.
//!    Name lookups happen once at the boundary and every match is exhaustive.
//!
//! 2. **No I/O**: the engine never prints or reads. Callers drive it through
//!    `Encounter` and `Campaign` and render `Display` output themselves.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: deck, hand and discard are `im` vectors so a
//!   `Player` snapshot clones in O(1).
//!
//! - **Borrowed Player**: an `Encounter` borrows the player mutably; HP,
//!   deck and discard carry over to the next encounter.
//!
//! ## Modules
//!
//! - `core`: combatants, player, status rules, ids, RNG, configuration
//! - `cards`: the five cards and their stats
//! - `zones`: deck / hand / discard piles
//! - `monsters`: monster kinds, strategies and spawning
//! - `encounter`: the combat state machine
//! - `campaign`: sequences of encounters

pub mod core;
pub mod cards;
pub mod zones;
pub mod monsters;
pub mod encounter;
pub mod campaign;

// Re-export commonly used types
pub use crate::core::{
    Combatant, Character, Player,
    CombatConfig, ConfigError, DamageModifiers, DamageRange, TurnRules,
    MonsterId, MonsterIdAllocator,
    GameRng, GameRngState,
    StatusGrants, scaled_damage,
};

pub use crate::cards::{Card, CardDefinition, UnknownCard};

pub use crate::zones::CardPiles;

pub use crate::monsters::{
    ActionEffect, Intent, Strategy,
    Monster, MonsterKind, MonsterSpec, MonsterFactory, SpawnError, UnknownMonster,
};

pub use crate::encounter::{CardPlayed, Encounter, EncounterOutcome, PlayError, TurnPhase};

pub use crate::campaign::{validate_plan, Campaign, CampaignSnapshot, CampaignStatus, PlanError};
