//! One battle: the player against a roster of monsters.
//!
//! ## Turn flow
//!
//! ```text
//! new() ──► PlayerTurn ──end_player_turn()──► MonsterTurn ──enemy_turn()──┐
//!              ▲                                                          │
//!              └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The encounter is `Finished` once the roster is empty or the player is
//! defeated. Monsters are removed the moment they are defeated.

use smallvec::SmallVec;

use super::error::PlayError;
use crate::cards::{Card, UnknownCard};
use crate::core::{scaled_damage, DamageModifiers, MonsterId, Player};
use crate::monsters::{Monster, MonsterFactory, MonsterSpec};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Player,
    Monsters,
}

/// Externally visible encounter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The player may play cards.
    PlayerTurn,
    /// Waiting for `enemy_turn`.
    MonsterTurn,
    /// Roster empty or player defeated.
    Finished,
}

/// How a finished encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Every monster was defeated.
    Victory,
    /// The player was defeated.
    Defeat,
}

/// A successful card play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPlayed {
    pub card: Card,
    pub target: Option<MonsterId>,
    /// Damage dealt to the target after modifiers, before block.
    pub damage: Option<i32>,
    /// The target was defeated and removed.
    pub defeated: bool,
}

/// A single battle.
///
/// Borrows the player for its whole lifetime; deck, discard and HP carry
/// over to the next encounter.
#[derive(Debug)]
pub struct Encounter<'p> {
    player: &'p mut Player,
    roster: SmallVec<[Monster; 3]>,
    side: Side,
    modifiers: DamageModifiers,
    round: u32,
}

impl<'p> Encounter<'p> {
    /// Start an encounter against the monsters in `specs`.
    ///
    /// Specs with an unknown type name or non-positive max HP are
    /// skipped. The discard pile is
    /// recycled into the deck and the player's first turn begins.
    pub fn new(player: &'p mut Player, specs: &[MonsterSpec], factory: &mut MonsterFactory) -> Self {
        let mut roster: SmallVec<[Monster; 3]> = SmallVec::new();
        for spec in specs {
            match factory.spawn(spec) {
                Ok(monster) => roster.push(monster),
                Err(err) => tracing::warn!(max_hp = spec.max_hp, "skipping monster: {}", err),
            }
        }
        let modifiers = factory.config().damage;
        Self::with_roster(player, roster, modifiers)
    }

    /// Start an encounter against an already-built roster.
    pub fn with_roster(
        player: &'p mut Player,
        roster: impl IntoIterator<Item = Monster>,
        modifiers: DamageModifiers,
    ) -> Self {
        let mut encounter = Self {
            player,
            roster: roster.into_iter().collect(),
            side: Side::Player,
            modifiers,
            round: 0,
        };
        tracing::debug!(monsters = encounter.roster.len(), "encounter started");
        encounter.player.prepare_new_encounter();
        encounter.start_new_turn();
        encounter
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut *self.player
    }

    #[must_use]
    pub fn deck(&self) -> &im::Vector<Card> {
        self.player.deck()
    }

    #[must_use]
    pub fn hand(&self) -> &im::Vector<Card> {
        self.player.hand()
    }

    #[must_use]
    pub fn discard(&self) -> &im::Vector<Card> {
        self.player.discard()
    }

    /// Player turns started so far, including the current one.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The roster in insertion order.
    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.roster
    }

    /// Monsters still standing, in roster order.
    pub fn alive_monsters(&self) -> impl Iterator<Item = &Monster> + '_ {
        self.roster.iter().filter(|m| !m.is_defeated())
    }

    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.roster.iter().find(|m| m.id() == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.roster.iter_mut().find(|m| m.id() == id)
    }

    /// True while at least one monster remains.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive_monsters().next().is_some()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if !self.is_active() || self.player.is_defeated() {
            return TurnPhase::Finished;
        }
        match self.side {
            Side::Player => TurnPhase::PlayerTurn,
            Side::Monsters => TurnPhase::MonsterTurn,
        }
    }

    /// `None` while the encounter is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<EncounterOutcome> {
        if self.player.is_defeated() {
            Some(EncounterOutcome::Defeat)
        } else if !self.is_active() {
            Some(EncounterOutcome::Victory)
        } else {
            None
        }
    }

    /// End the encounter, releasing the player.
    ///
    /// On victory the hand is swept into the discard pile so the next
    /// encounter can recycle it.
    pub fn conclude(self) -> Option<EncounterOutcome> {
        let outcome = self.outcome();
        if outcome == Some(EncounterOutcome::Victory) {
            self.player.end_turn();
        }
        tracing::debug!(?outcome, rounds = self.round, "encounter concluded");
        outcome
    }

    /// Play the first card in hand named `name`, optionally at a monster.
    pub fn try_play_card(&mut self, name: &str, target: Option<MonsterId>) -> Result<CardPlayed, PlayError> {
        let result = self.play_card_inner(name, target);
        if let Err(err) = &result {
            tracing::trace!(card = name, ?target, %err, "card play rejected");
        }
        result
    }

    /// Boolean form of [`try_play_card`](Self::try_play_card).
    pub fn player_apply_card(&mut self, name: &str, target: Option<MonsterId>) -> bool {
        self.try_play_card(name, target).is_ok()
    }

    fn play_card_inner(&mut self, name: &str, target: Option<MonsterId>) -> Result<CardPlayed, PlayError> {
        if self.player.energy() <= 0 {
            return Err(PlayError::NoEnergy);
        }
        if self.side != Side::Player {
            return Err(PlayError::NotPlayerTurn);
        }
        let kind = Card::from_name(name).ok_or_else(|| UnknownCard(name.to_string()))?;
        if kind.requires_target() && target.is_none() {
            return Err(PlayError::TargetRequired(kind));
        }
        let target_index = match target {
            Some(id) => Some(
                self.roster
                    .iter()
                    .position(|m| m.id() == id && !m.is_defeated())
                    .ok_or(PlayError::NoSuchTarget(id))?,
            ),
            None => None,
        };
        let card = self.player.play_card(name).ok_or(PlayError::NotPlayable(kind))?;

        let grants = card.status_grants();
        let me = self.player.combatant_mut();
        me.add_block(card.block());
        me.add_strength(grants.strength);
        let strength = me.strength();
        let weak = me.weak() > 0;

        let mut played = CardPlayed {
            card,
            target,
            damage: None,
            defeated: false,
        };
        let Some(index) = target_index else {
            tracing::debug!(card = card.name(), "card played");
            return Ok(played);
        };

        let monster = &mut self.roster[index];
        let id = monster.id();
        let foe = monster.combatant_mut();
        foe.add_vulnerable(grants.vulnerable);
        foe.add_weak(grants.weak);
        let damage = scaled_damage(card.damage() + strength, foe.vulnerable() > 0, weak, &self.modifiers);
        foe.apply_damage(damage);
        played.damage = Some(damage);
        tracing::debug!(card = card.name(), target = %id, damage, hp = foe.hp(), "card played");

        if foe.is_defeated() {
            let monster = self.roster.remove(index);
            played.defeated = true;
            tracing::debug!(target = %id, kind = %monster.kind(), "monster defeated");
        }
        Ok(played)
    }

    /// Hand the turn to the monsters.
    ///
    /// Sweeps the hand and runs start-of-turn decay for every monster.
    pub fn end_player_turn(&mut self) {
        self.side = Side::Monsters;
        self.player.end_turn();
        for monster in &mut self.roster {
            monster.combatant_mut().advance_turn();
        }
        tracing::debug!(round = self.round, "player turn ended");
    }

    /// Every monster acts in roster order, then a new player turn begins.
    ///
    /// Does nothing during the player's turn. Monsters keep acting after
    /// the player reaches 0 HP.
    pub fn enemy_turn(&mut self) {
        if self.side == Side::Player {
            return;
        }
        for monster in &mut self.roster {
            let action = monster.act();
            let me = self.player.combatant_mut();
            if let Some(weak) = action.weak {
                me.add_weak(weak);
            }
            if let Some(vulnerable) = action.vulnerable {
                me.add_vulnerable(vulnerable);
            }
            if let Some(strength) = action.strength {
                monster.combatant_mut().add_strength(strength);
            }
            let foe = monster.combatant();
            let damage = scaled_damage(
                foe.strength() + action.damage,
                me.vulnerable() > 0,
                foe.weak() > 0,
                &self.modifiers,
            );
            me.apply_damage(damage);
            tracing::debug!(monster = %monster.id(), damage, player_hp = me.hp(), "monster acted");
        }
        self.start_new_turn();
    }

    fn start_new_turn(&mut self) {
        self.side = Side::Player;
        self.round += 1;
        self.player.start_new_turn();
    }
}
