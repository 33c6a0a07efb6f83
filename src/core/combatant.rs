//! Combat state shared by the player and monsters.
//!
//! A `Combatant` tracks HP, block and the three status counters.
//! Damage is absorbed by block before it reaches HP, and HP is
//! clamped to `0..=max_hp`.
//!
//! ```
//! use spire_combat::core::Combatant;
//!
//! let mut target = Combatant::new("Louse", 20);
//! target.add_block(5);
//! target.apply_damage(10);
//!
//! assert_eq!(target.hp(), 15);
//! assert_eq!(target.block(), 0);
//! assert_eq!(target.to_string(), "Louse: 15/20 HP");
//! ```

use serde::{Deserialize, Serialize};

/// Mutable combat state of one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    max_hp: i32,
    hp: i32,
    block: i32,
    strength: i32,
    weak: i32,
    vulnerable: i32,
}

impl Combatant {
    /// Create a combatant at full HP with no block or statuses.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            hp: max_hp,
            block: 0,
            strength: 0,
            weak: 0,
            vulnerable: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn max_hp(&self) -> i32 {
        self.max_hp
    }

    #[must_use]
    pub const fn hp(&self) -> i32 {
        self.hp
    }

    #[must_use]
    pub const fn block(&self) -> i32 {
        self.block
    }

    #[must_use]
    pub const fn strength(&self) -> i32 {
        self.strength
    }

    /// Turns of weak remaining.
    #[must_use]
    pub const fn weak(&self) -> i32 {
        self.weak
    }

    /// Turns of vulnerable remaining.
    #[must_use]
    pub const fn vulnerable(&self) -> i32 {
        self.vulnerable
    }

    /// HP lost so far (`max_hp - hp`).
    #[must_use]
    pub const fn damage_taken(&self) -> i32 {
        self.max_hp - self.hp
    }

    /// Take `amount` damage. Block absorbs first; HP never drops below 0.
    ///
    /// `amount` must be non-negative.
    pub fn apply_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "negative damage {amount}");
        if self.block >= amount {
            self.block -= amount;
        } else {
            let through = amount - self.block;
            self.block = 0;
            self.hp = (self.hp - through).max(0);
        }
    }

    pub fn add_block(&mut self, amount: i32) {
        self.block += amount;
    }

    /// Replace the current block outright.
    pub fn set_block(&mut self, block: i32) {
        self.block = block;
    }

    pub fn add_strength(&mut self, amount: i32) {
        self.strength += amount;
    }

    pub fn add_weak(&mut self, amount: i32) {
        self.weak += amount;
    }

    pub fn add_vulnerable(&mut self, amount: i32) {
        self.vulnerable += amount;
    }

    /// Start-of-turn decay: block resets, weak and vulnerable tick down.
    /// Strength is untouched.
    pub fn advance_turn(&mut self) {
        self.block = 0;
        self.weak = (self.weak - 1).max(0);
        self.vulnerable = (self.vulnerable - 1).max(0);
    }

    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} HP", self.name, self.hp, self.max_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_full_hp() {
        let c = Combatant::new("Cultist", 50);
        assert_eq!(c.hp(), 50);
        assert_eq!(c.max_hp(), 50);
        assert_eq!(c.block(), 0);
        assert_eq!(c.damage_taken(), 0);
        assert!(!c.is_defeated());
    }

    #[test]
    fn test_damage_clamped_at_zero() {
        let mut c = Combatant::new("Louse", 5);
        c.apply_damage(100);
        assert_eq!(c.hp(), 0);
        assert_eq!(c.block(), 0);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_block_absorbs_first() {
        let mut c = Combatant::new("Louse", 20);
        c.add_block(5);
        c.apply_damage(10);
        assert_eq!(c.hp(), 15);
        assert_eq!(c.block(), 0);
    }

    #[test]
    fn test_block_exact_boundary() {
        let mut c = Combatant::new("Louse", 20);
        c.add_block(7);
        c.apply_damage(7);
        assert_eq!(c.hp(), 20);
        assert_eq!(c.block(), 0);

        c.add_block(9);
        c.apply_damage(4);
        assert_eq!(c.hp(), 20);
        assert_eq!(c.block(), 5);
    }

    #[test]
    fn test_advance_turn_decay() {
        let mut c = Combatant::new("JawWorm", 40);
        c.add_block(12);
        c.add_strength(2);
        c.add_weak(1);
        c.add_vulnerable(2);

        c.advance_turn();
        assert_eq!(c.block(), 0);
        assert_eq!(c.weak(), 0);
        assert_eq!(c.vulnerable(), 1);
        assert_eq!(c.strength(), 2);

        c.advance_turn();
        c.advance_turn();
        assert_eq!(c.weak(), 0);
        assert_eq!(c.vulnerable(), 0);
        assert_eq!(c.strength(), 2);
    }

    #[test]
    fn test_display() {
        let mut c = Combatant::new("IronClad", 80);
        c.apply_damage(6);
        assert_eq!(c.to_string(), "IronClad: 74/80 HP");
    }
}
