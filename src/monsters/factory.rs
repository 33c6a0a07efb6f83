//! Monster spawning.
//!
//! `MonsterFactory` owns everything needed to turn a [`MonsterSpec`] into a
//! live [`Monster`]: the combat configuration, the id allocator and the RNG
//! for fixed-roll damage. Keep one factory per campaign so ids stay unique
//! across encounters.

use super::monster::{Monster, MonsterKind, MonsterSpec, UnknownMonster};
use super::strategy::Strategy;
use crate::core::{CombatConfig, GameRng, MonsterIdAllocator};

/// A spec the factory refuses to spawn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error(transparent)]
    UnknownKind(#[from] UnknownMonster),

    #[error("{kind} needs positive max HP, got {max_hp}")]
    NonPositiveHp { kind: MonsterKind, max_hp: i32 },
}

/// Builds monsters with unique ids.
#[derive(Clone, Debug)]
pub struct MonsterFactory {
    config: CombatConfig,
    ids: MonsterIdAllocator,
    rng: GameRng,
}

impl MonsterFactory {
    /// Create a factory with default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(CombatConfig::default(), seed)
    }

    /// Create a factory with a custom configuration.
    #[must_use]
    pub fn with_config(config: CombatConfig, seed: u64) -> Self {
        Self {
            config,
            ids: MonsterIdAllocator::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Create a factory from explicit parts.
    #[must_use]
    pub fn from_parts(config: CombatConfig, ids: MonsterIdAllocator, rng: GameRng) -> Self {
        Self { config, ids, rng }
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Id allocator state.
    #[must_use]
    pub fn ids(&self) -> &MonsterIdAllocator {
        &self.ids
    }

    /// RNG used for fixed-roll damage.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Initial strategy for a new monster of `kind`. Rolls fixed-roll damage.
    pub fn strategy_for(&mut self, kind: MonsterKind) -> Strategy {
        match kind {
            MonsterKind::Louse => {
                let range = self.config.fixed_roll_damage;
                Strategy::FixedRoll {
                    damage: self.rng.roll(range.min, range.max),
                }
            }
            MonsterKind::Cultist => Strategy::escalating(self.config.escalating_base_damage),
            MonsterKind::JawWorm => Strategy::Reactive,
        }
    }

    /// Spawn a monster of a known kind. `max_hp` must be positive.
    pub fn spawn_kind(&mut self, kind: MonsterKind, max_hp: i32) -> Monster {
        debug_assert!(max_hp > 0, "{kind} spawned with max HP {max_hp}");
        let strategy = self.strategy_for(kind);
        let id = self.ids.allocate();
        Monster::new(id, kind, max_hp, strategy)
    }

    /// Spawn a monster from a spec.
    ///
    /// Unknown type names and non-positive max HP are rejected without
    /// consuming an id or a roll.
    pub fn spawn(&mut self, spec: &MonsterSpec) -> Result<Monster, SpawnError> {
        let kind = spec.kind()?;
        if spec.max_hp <= 0 {
            return Err(SpawnError::NonPositiveHp {
                kind,
                max_hp: spec.max_hp,
            });
        }
        Ok(self.spawn_kind(kind, spec.max_hp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonsterId;

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut factory = MonsterFactory::new(42);

        let a = factory.spawn(&MonsterSpec::new("Louse", 10)).unwrap();
        let b = factory.spawn(&MonsterSpec::new("Cultist", 48)).unwrap();

        assert_eq!(a.id(), MonsterId(0));
        assert_eq!(b.id(), MonsterId(1));
        assert_eq!(factory.ids().peek(), MonsterId(2));
    }

    #[test]
    fn test_unknown_kind_keeps_id() {
        let mut factory = MonsterFactory::new(42);

        let err = factory.spawn(&MonsterSpec::new("Slime", 10)).unwrap_err();
        assert_eq!(err, SpawnError::UnknownKind(UnknownMonster("Slime".to_string())));
        assert_eq!(err.to_string(), "unknown monster type: Slime");
        assert_eq!(factory.ids().peek(), MonsterId(0));
    }

    #[test]
    fn test_non_positive_hp_rejected() {
        let mut factory = MonsterFactory::new(42);
        let rng_before = factory.rng().state();

        for max_hp in [0, -5] {
            let err = factory.spawn(&MonsterSpec::new("Louse", max_hp)).unwrap_err();
            assert_eq!(
                err,
                SpawnError::NonPositiveHp {
                    kind: MonsterKind::Louse,
                    max_hp,
                }
            );
        }
        assert_eq!(
            SpawnError::NonPositiveHp {
                kind: MonsterKind::Cultist,
                max_hp: -5,
            }
            .to_string(),
            "Cultist needs positive max HP, got -5"
        );
        assert_eq!(factory.ids().peek(), MonsterId(0));
        assert_eq!(factory.rng().state(), rng_before);
    }

    #[test]
    fn test_louse_roll_in_range() {
        let mut factory = MonsterFactory::new(7);

        for _ in 0..50 {
            let louse = factory.spawn_kind(MonsterKind::Louse, 10);
            match louse.strategy() {
                Strategy::FixedRoll { damage } => assert!((5..=7).contains(damage)),
                other => panic!("unexpected strategy {other:?}"),
            }
        }
    }

    #[test]
    fn test_custom_config() {
        let config = CombatConfig::default()
            .with_fixed_roll_damage(2, 2)
            .with_escalating_base_damage(10);
        let mut factory = MonsterFactory::with_config(config, 1);

        let louse = factory.spawn_kind(MonsterKind::Louse, 10);
        assert_eq!(*louse.strategy(), Strategy::FixedRoll { damage: 2 });

        let cultist = factory.spawn_kind(MonsterKind::Cultist, 10);
        assert_eq!(*cultist.strategy(), Strategy::Escalating { base: 10, calls: 0 });

        let worm = factory.spawn_kind(MonsterKind::JawWorm, 10);
        assert_eq!(*worm.strategy(), Strategy::Reactive);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = MonsterFactory::new(99);
        let mut b = MonsterFactory::new(99);

        for _ in 0..10 {
            assert_eq!(
                a.spawn_kind(MonsterKind::Louse, 10).strategy(),
                b.spawn_kind(MonsterKind::Louse, 10).strategy()
            );
        }
    }

    #[test]
    fn test_from_parts_resumes_ids() {
        let mut factory = MonsterFactory::from_parts(
            CombatConfig::default(),
            MonsterIdAllocator::starting_at(10),
            GameRng::new(0),
        );
        assert_eq!(factory.spawn_kind(MonsterKind::JawWorm, 40).id(), MonsterId(10));
    }
}
