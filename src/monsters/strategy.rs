//! Monster action strategies.
//!
//! A strategy decides what a monster does on its turn. Evaluation is a pure
//! function of the strategy's own state and the monster's combat state:
//! `evaluate` returns an [`Intent`] holding the effect on the player, any
//! change to the monster's own block, and the strategy state for the next
//! turn. [`Monster::act`](super::Monster::act) commits the intent.

use serde::{Deserialize, Serialize};

use crate::core::Combatant;

/// Effect of one monster action on its target.
///
/// `damage` is always present. Status fields are `None` when the action
/// does not mention them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEffect {
    pub damage: i32,
    /// Weak applied to the player.
    pub weak: Option<i32>,
    /// Vulnerable applied to the player.
    pub vulnerable: Option<i32>,
    /// Strength gained by the acting monster.
    pub strength: Option<i32>,
}

impl ActionEffect {
    /// A plain attack.
    #[must_use]
    pub const fn damage(damage: i32) -> Self {
        Self {
            damage,
            weak: None,
            vulnerable: None,
            strength: None,
        }
    }

    #[must_use]
    pub const fn with_weak(mut self, weak: i32) -> Self {
        self.weak = Some(weak);
        self
    }

    #[must_use]
    pub const fn with_vulnerable(mut self, vulnerable: i32) -> Self {
        self.vulnerable = Some(vulnerable);
        self
    }

    #[must_use]
    pub const fn with_strength(mut self, strength: i32) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Outcome of evaluating a strategy, not yet applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intent {
    /// Effect on the player.
    pub effect: ActionEffect,
    /// New block for the acting monster, if the action sets it.
    pub self_block: Option<i32>,
    /// Strategy state after this action.
    pub next: Strategy,
}

/// Per-monster behavior and its hidden state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Same damage every turn, rolled once when the monster is created.
    FixedRoll { damage: i32 },

    /// First action does nothing. After that the actions deal `base`,
    /// `base + 1`, `base + 2`, ... with weak alternating 0, 1, 0, 1, ...
    ///
    /// `calls` counts actions taken so far.
    Escalating { base: i32, calls: u32 },

    /// Blocks half the damage taken so far (rounded up) and hits back
    /// for half (rounded down).
    Reactive,
}

impl Strategy {
    /// A fresh escalating strategy.
    #[must_use]
    pub const fn escalating(base: i32) -> Self {
        Strategy::Escalating { base, calls: 0 }
    }

    /// Decide this turn's action.
    #[must_use]
    pub fn evaluate(&self, me: &Combatant) -> Intent {
        match *self {
            Strategy::FixedRoll { damage } => Intent {
                effect: ActionEffect::damage(damage),
                self_block: None,
                next: *self,
            },
            Strategy::Escalating { base, calls } => {
                let (damage, weak) = match calls.checked_sub(1) {
                    None => (0, 0),
                    Some(ramp) => (base + ramp as i32, (ramp % 2) as i32),
                };
                Intent {
                    effect: ActionEffect::damage(damage).with_weak(weak),
                    self_block: None,
                    next: Strategy::Escalating {
                        base,
                        calls: calls + 1,
                    },
                }
            }
            Strategy::Reactive => {
                let taken = me.damage_taken();
                Intent {
                    effect: ActionEffect::damage(taken / 2),
                    self_block: Some((taken + 1) / 2),
                    next: Strategy::Reactive,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_roll_is_constant() {
        let me = Combatant::new("Louse", 10);
        let mut strategy = Strategy::FixedRoll { damage: 6 };

        for _ in 0..5 {
            let intent = strategy.evaluate(&me);
            assert_eq!(intent.effect, ActionEffect::damage(6));
            assert_eq!(intent.self_block, None);
            strategy = intent.next;
        }
    }

    #[test]
    fn test_escalating_sequence() {
        let me = Combatant::new("Cultist", 50);
        let mut strategy = Strategy::escalating(6);

        let mut seen = Vec::new();
        for _ in 0..5 {
            let intent = strategy.evaluate(&me);
            seen.push((intent.effect.damage, intent.effect.weak));
            strategy = intent.next;
        }

        assert_eq!(
            seen,
            vec![
                (0, Some(0)),
                (6, Some(0)),
                (7, Some(1)),
                (8, Some(0)),
                (9, Some(1)),
            ]
        );
        assert_eq!(strategy, Strategy::Escalating { base: 6, calls: 5 });
    }

    #[test]
    fn test_evaluate_is_pure() {
        let me = Combatant::new("Cultist", 50);
        let strategy = Strategy::escalating(6);

        assert_eq!(strategy.evaluate(&me), strategy.evaluate(&me));
    }

    #[test]
    fn test_reactive_halves_damage_taken() {
        let mut me = Combatant::new("JawWorm", 44);
        me.apply_damage(24);

        let intent = Strategy::Reactive.evaluate(&me);
        assert_eq!(intent.self_block, Some(12));
        assert_eq!(intent.effect, ActionEffect::damage(12));
    }

    #[test]
    fn test_reactive_rounding() {
        let mut me = Combatant::new("JawWorm", 40);
        me.apply_damage(7);

        let intent = Strategy::Reactive.evaluate(&me);
        assert_eq!(intent.self_block, Some(4));
        assert_eq!(intent.effect.damage, 3);

        let fresh = Combatant::new("JawWorm", 40);
        let intent = Strategy::Reactive.evaluate(&fresh);
        assert_eq!(intent.self_block, Some(0));
        assert_eq!(intent.effect.damage, 0);
    }

    #[test]
    fn test_effect_builder() {
        let effect = ActionEffect::damage(3)
            .with_weak(1)
            .with_vulnerable(2)
            .with_strength(3);
        assert_eq!(effect.weak, Some(1));
        assert_eq!(effect.vulnerable, Some(2));
        assert_eq!(effect.strength, Some(3));
    }
}
