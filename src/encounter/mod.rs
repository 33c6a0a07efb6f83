//! Encounters: one player against a roster of monsters.
//!
//! ## Key Types
//!
//! - `Encounter`: turn state machine, card resolution, monster turns
//! - `TurnPhase`: PlayerTurn / MonsterTurn / Finished
//! - `PlayError`: why a card play was rejected
//! - `CardPlayed`: what a successful play did
//! - `EncounterOutcome`: Victory / Defeat

pub mod battle;
pub mod error;

pub use battle::{CardPlayed, Encounter, EncounterOutcome, TurnPhase};
pub use error::PlayError;
