//! Card system.
//!
//! ## Key Types
//!
//! - `Card`: the five playable cards (Strike, Defend, Bash, Neutralize, Survivor)
//! - `CardDefinition`: static stats behind each card
//! - `UnknownCard`: a name that is not a card

pub mod definition;

pub use definition::{Card, CardDefinition, UnknownCard};
