//! Campaign progress across encounters.
//!
//! The player's HP, deck and discard pile carry from one encounter to the
//! next. Monster ids come from a single factory so they are never reused
//! within a campaign.
//!
//! ```text
//! begin_encounter() ──► Encounter ... conclude() ──► record(outcome)
//!        ▲                                                 │
//!        └──────────────── while InProgress ───────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Character, CombatConfig, ConfigError, GameRng, GameRngState, MonsterIdAllocator, Player};
use crate::encounter::{Encounter, EncounterOutcome};
use crate::monsters::{MonsterFactory, MonsterKind, MonsterSpec};

/// Where a campaign stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// Encounters remain and the player is alive.
    InProgress,
    /// Every planned encounter was cleared.
    Won,
    /// The player was defeated.
    Lost,
}

/// A plan entry that the strict check rejects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("encounter {encounter}, slot {slot}: unknown monster type {kind:?}")]
    UnknownMonster {
        encounter: usize,
        slot: usize,
        kind: String,
    },

    #[error("encounter {encounter}, slot {slot}: max HP must be positive, got {max_hp}")]
    NonPositiveHp {
        encounter: usize,
        slot: usize,
        max_hp: i32,
    },
}

/// Check every monster of a plan, stopping at the first bad entry.
///
/// [`Encounter::new`] skips unknown monster types; run this first to
/// reject them instead.
pub fn validate_plan(plan: &[Vec<MonsterSpec>]) -> Result<(), PlanError> {
    for (encounter, specs) in plan.iter().enumerate() {
        for (slot, spec) in specs.iter().enumerate() {
            if spec.kind.parse::<MonsterKind>().is_err() {
                return Err(PlanError::UnknownMonster {
                    encounter,
                    slot,
                    kind: spec.kind.clone(),
                });
            }
            if spec.max_hp <= 0 {
                return Err(PlanError::NonPositiveHp {
                    encounter,
                    slot,
                    max_hp: spec.max_hp,
                });
            }
        }
    }
    Ok(())
}

/// Serializable save of a campaign between encounters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub player: Player,
    pub plan: Vec<Vec<MonsterSpec>>,
    pub config: CombatConfig,
    pub ids: MonsterIdAllocator,
    pub rng: GameRngState,
    pub cleared: usize,
    pub lost: bool,
}

/// A player working through a fixed list of encounters.
#[derive(Clone, Debug)]
pub struct Campaign {
    player: Player,
    plan: Vec<Vec<MonsterSpec>>,
    factory: MonsterFactory,
    cleared: usize,
    lost: bool,
}

impl Campaign {
    #[must_use]
    pub fn new(player: Player, plan: Vec<Vec<MonsterSpec>>, factory: MonsterFactory) -> Self {
        Self {
            player,
            plan,
            factory,
            cleared: 0,
            lost: false,
        }
    }

    /// Start a preset character on `plan` using `config` for both the
    /// player's turn rules and monster spawning.
    pub fn for_character(
        character: Character,
        plan: Vec<Vec<MonsterSpec>>,
        config: CombatConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::from_character(character).with_turn_rules(config.turn);
        Ok(Self::new(player, plan, MonsterFactory::with_config(config, seed)))
    }

    /// Capture the campaign for later [`from_snapshot`](Self::from_snapshot).
    #[must_use]
    pub fn snapshot(&self) -> CampaignSnapshot {
        CampaignSnapshot {
            player: self.player.clone(),
            plan: self.plan.clone(),
            config: self.factory.config().clone(),
            ids: self.factory.ids().clone(),
            rng: self.factory.rng().state(),
            cleared: self.cleared,
            lost: self.lost,
        }
    }

    /// Resume a saved campaign. Monster ids and rolls continue where the
    /// snapshot left off.
    #[must_use]
    pub fn from_snapshot(snapshot: CampaignSnapshot) -> Self {
        let factory = MonsterFactory::from_parts(snapshot.config, snapshot.ids, GameRng::from_state(&snapshot.rng));
        Self {
            player: snapshot.player,
            plan: snapshot.plan,
            factory,
            cleared: snapshot.cleared,
            lost: snapshot.lost,
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn plan(&self) -> &[Vec<MonsterSpec>] {
        &self.plan
    }

    /// Encounters won so far.
    #[must_use]
    pub const fn cleared(&self) -> usize {
        self.cleared
    }

    #[must_use]
    pub fn status(&self) -> CampaignStatus {
        if self.lost || self.player.is_defeated() {
            CampaignStatus::Lost
        } else if self.cleared >= self.plan.len() {
            CampaignStatus::Won
        } else {
            CampaignStatus::InProgress
        }
    }

    /// Start the next uncleared encounter.
    ///
    /// Returns `None` once the campaign is won or lost. Conclude the
    /// encounter and pass its outcome to [`record`](Self::record) before
    /// beginning another; an unrecorded encounter is fought again.
    pub fn begin_encounter(&mut self) -> Option<Encounter<'_>> {
        if self.status() != CampaignStatus::InProgress {
            return None;
        }
        let specs = self.plan.get(self.cleared)?;
        tracing::info!(
            encounter = self.cleared,
            monsters = specs.len(),
            hp = self.player.combatant().hp(),
            "encounter begins"
        );
        Some(Encounter::new(&mut self.player, specs, &mut self.factory))
    }

    /// Record how the current encounter ended.
    pub fn record(&mut self, outcome: EncounterOutcome) {
        match outcome {
            EncounterOutcome::Victory => self.cleared += 1,
            EncounterOutcome::Defeat => self.lost = true,
        }
        tracing::info!(
            ?outcome,
            cleared = self.cleared,
            remaining = self.plan.len().saturating_sub(self.cleared),
            "encounter finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::MonsterId;

    fn plan(encounters: &[&[(&str, i32)]]) -> Vec<Vec<MonsterSpec>> {
        encounters
            .iter()
            .map(|specs| specs.iter().map(|&pair| MonsterSpec::from(pair)).collect())
            .collect()
    }

    #[test]
    fn test_validate_plan() {
        assert_eq!(validate_plan(&plan(&[&[("Louse", 10)], &[("JawWorm", 40)]])), Ok(()));
        assert_eq!(
            validate_plan(&plan(&[&[("Louse", 10)], &[("Cultist", 50), ("Slime", 5)]])),
            Err(PlanError::UnknownMonster {
                encounter: 1,
                slot: 1,
                kind: "Slime".to_string(),
            })
        );
        assert_eq!(
            validate_plan(&plan(&[&[("Louse", 0)]])),
            Err(PlanError::NonPositiveHp {
                encounter: 0,
                slot: 0,
                max_hp: 0,
            })
        );
    }

    #[test]
    fn test_plan_error_message() {
        let err = PlanError::UnknownMonster {
            encounter: 2,
            slot: 0,
            kind: "Slime".to_string(),
        };
        assert_eq!(err.to_string(), "encounter 2, slot 0: unknown monster type \"Slime\"");
    }

    #[test]
    fn test_empty_plan_is_won() {
        let mut campaign = Campaign::new(
            Player::from_character(Character::IronClad),
            Vec::new(),
            MonsterFactory::new(0),
        );
        assert_eq!(campaign.status(), CampaignStatus::Won);
        assert!(campaign.begin_encounter().is_none());
    }

    #[test]
    fn test_for_character_applies_turn_rules() {
        let config = CombatConfig::default().with_turn_rules(crate::core::TurnRules {
            energy_per_turn: 4,
            hand_size: 6,
        });
        let mut campaign =
            Campaign::for_character(Character::Silent, plan(&[&[("JawWorm", 40)]]), config, 3).unwrap();

        let encounter = campaign.begin_encounter().unwrap();
        assert_eq!(encounter.player().energy(), 4);
        assert_eq!(encounter.hand().len(), 6);
    }

    #[test]
    fn test_for_character_rejects_bad_config() {
        let config = CombatConfig::default().with_fixed_roll_damage(7, 5);
        let result = Campaign::for_character(Character::IronClad, Vec::new(), config, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_victory_advances() {
        let player = Player::new("Tester", 30, [Card::Strike; 10]);
        let mut campaign = Campaign::new(
            player,
            plan(&[&[("Louse", 6)], &[("Louse", 6)]]),
            MonsterFactory::new(0),
        );

        let mut encounter = campaign.begin_encounter().unwrap();
        assert!(encounter.player_apply_card("Strike", Some(MonsterId(0))));
        let outcome = encounter.conclude().unwrap();
        campaign.record(outcome);
        assert_eq!(campaign.cleared(), 1);
        assert_eq!(campaign.status(), CampaignStatus::InProgress);

        let mut encounter = campaign.begin_encounter().unwrap();
        assert_eq!(encounter.monsters()[0].id(), MonsterId(1));
        assert!(encounter.player_apply_card("Strike", Some(MonsterId(1))));
        let outcome = encounter.conclude().unwrap();
        campaign.record(outcome);

        assert_eq!(campaign.status(), CampaignStatus::Won);
        assert!(campaign.begin_encounter().is_none());
    }

    #[test]
    fn test_snapshot_resumes_ids_and_rolls() {
        let mut campaign = Campaign::new(
            Player::from_character(Character::IronClad),
            plan(&[&[("Louse", 6)], &[("Louse", 30), ("Louse", 30), ("Louse", 30)]]),
            MonsterFactory::new(11),
        );
        let mut encounter = campaign.begin_encounter().unwrap();
        assert!(encounter.player_apply_card("Strike", Some(MonsterId(0))));
        let outcome = encounter.conclude().unwrap();
        campaign.record(outcome);

        let json = serde_json::to_string(&campaign.snapshot()).unwrap();
        let snapshot: CampaignSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, campaign.snapshot());
        let mut resumed = Campaign::from_snapshot(snapshot);

        assert_eq!(resumed.cleared(), 1);
        assert_eq!(resumed.player(), campaign.player());
        let expected = campaign.begin_encounter().unwrap().monsters().to_vec();
        let actual = resumed.begin_encounter().unwrap().monsters().to_vec();
        assert_eq!(expected[0].id(), MonsterId(1));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_record_defeat_loses() {
        let mut campaign = Campaign::new(
            Player::from_character(Character::IronClad),
            plan(&[&[("Louse", 10)]]),
            MonsterFactory::new(0),
        );
        campaign.record(EncounterOutcome::Defeat);
        assert_eq!(campaign.status(), CampaignStatus::Lost);
        assert!(campaign.begin_encounter().is_none());
    }
}
