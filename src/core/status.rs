//! Status effects and the damage formula.
//!
//! - **Strength**: additive bonus to outgoing attack damage, never decays.
//! - **Weak**: turns during which the afflicted entity deals reduced damage.
//! - **Vulnerable**: turns during which the afflicted entity takes increased damage.

use serde::{Deserialize, Serialize};

use super::config::DamageModifiers;

/// Status amounts granted by a card or an action. Absent statuses are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusGrants {
    pub strength: i32,
    pub weak: i32,
    pub vulnerable: i32,
}

impl StatusGrants {
    /// No statuses.
    pub const NONE: StatusGrants = StatusGrants {
        strength: 0,
        weak: 0,
        vulnerable: 0,
    };
}

/// Final damage of an attack.
///
/// `base` is the attack's damage plus the attacker's strength. The result is
/// `base × vulnerable (if defender_vulnerable) × weak (if attacker_weak)`,
/// truncated toward zero and floored at 0.
///
/// ```
/// use spire_combat::core::{scaled_damage, DamageModifiers};
///
/// let mods = DamageModifiers::default();
/// assert_eq!(scaled_damage(8, true, false, &mods), 12);
/// assert_eq!(scaled_damage(9, true, true, &mods), 10);
/// ```
#[must_use]
pub fn scaled_damage(
    base: i32,
    defender_vulnerable: bool,
    attacker_weak: bool,
    modifiers: &DamageModifiers,
) -> i32 {
    let mut damage = f64::from(base);
    if defender_vulnerable {
        damage *= modifiers.vulnerable;
    }
    if attacker_weak {
        damage *= modifiers.weak;
    }
    // `as` truncates toward zero and saturates out-of-range values
    (damage as i32).max(0)
}
