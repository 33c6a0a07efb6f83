//! Card play rejections.

use crate::cards::{Card, UnknownCard};
use crate::core::MonsterId;

/// Why a card play was rejected. A rejected play changes nothing.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    /// The player has no energy left, whatever the card costs.
    #[error("no energy left")]
    NoEnergy,

    /// Cards can only be played during the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,

    /// The name is not a card.
    #[error(transparent)]
    UnknownCard(#[from] UnknownCard),

    /// The card needs a target and none was given.
    #[error("{0:?} requires a target")]
    TargetRequired(Card),

    /// No monster with this id remains in the encounter.
    #[error("no monster with id {0}")]
    NoSuchTarget(MonsterId),

    /// The card is not in hand or costs more energy than the player has.
    #[error("{0:?} cannot be played")]
    NotPlayable(Card),
}
