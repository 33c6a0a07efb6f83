//! Card piles for the player.
//!
//! ## Key Types
//!
//! - `CardPiles`: ordered deck, hand and discard

pub mod piles;

pub use piles::CardPiles;
