//! Turn-based encounter state machine.
//!
//! `CombatEncounter` knows nothing about time. Every phase change goes
//! through [`transition`]; the caller decides when a `Resolving` pause or
//! the enemy's wind-up is over and calls [`CombatEncounter::resolve`] or
//! [`CombatEncounter::enemy_act`]. That keeps the machine testable without a
//! clock, and lets `Game` drive it from its timer queue.

use super::logic::{
    enemy_attack_damage, physical_attack_damage, potion_heal_amount, roll_chance,
    skill_attack_damage, skill_base_damage,
};
use super::types::{CombatAction, CombatEvent, CombatOutcome, CombatPhase, Enemy, PendingPhase};
use crate::character::derived_stats::DerivedStats;
use crate::core::error::GameError;
use crate::skills::types::Skill;
use rand::Rng;

/// Inputs that move the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    PlayerActed(PendingPhase),
    DelayElapsed,
    EnemyActed { player_alive: bool },
}

/// The transition table. Returns `None` for a trigger the phase does not
/// accept.
pub fn transition(phase: CombatPhase, trigger: Trigger) -> Option<CombatPhase> {
    use CombatPhase as P;
    match (phase, trigger) {
        (P::Idle, Trigger::Start) => Some(P::PlayerTurn),
        (P::PlayerTurn, Trigger::PlayerActed(next)) => Some(P::Resolving(next)),
        (P::Resolving(next), Trigger::DelayElapsed) => Some(match next {
            PendingPhase::PlayerTurn => P::PlayerTurn,
            PendingPhase::EnemyTurn => P::EnemyTurn,
            PendingPhase::Finished(outcome) => P::Finished(outcome),
        }),
        (P::EnemyTurn, Trigger::EnemyActed { player_alive: true }) => Some(P::PlayerTurn),
        (P::EnemyTurn, Trigger::EnemyActed {
            player_alive: false,
        }) => Some(P::Resolving(PendingPhase::Finished(CombatOutcome::Defeat))),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatEncounter {
    pub enemy: Enemy,
    pub player_hp: u32,
    pub player_max_hp: u32,
    phase: CombatPhase,
    log: Vec<CombatEvent>,
}

impl CombatEncounter {
    /// A fresh encounter in `Idle`. The enemy is reset to full HP.
    pub fn new(mut enemy: Enemy, player_hp: u32, player_max_hp: u32) -> Self {
        enemy.reset_hp();
        Self {
            enemy,
            player_hp: player_hp.min(player_max_hp),
            player_max_hp,
            phase: CombatPhase::Idle,
            log: Vec::new(),
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn log(&self) -> &[CombatEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn apply(&mut self, trigger: Trigger) -> Result<CombatPhase, GameError> {
        let next = transition(self.phase, trigger).ok_or(match self.phase {
            CombatPhase::Idle | CombatPhase::Finished(_) => GameError::NotInCombat,
            _ => GameError::NotPlayerTurn,
        })?;
        self.phase = next;
        Ok(next)
    }

    pub fn start(&mut self) -> Result<CombatPhase, GameError> {
        self.apply(Trigger::Start)
    }

    /// Carries out the player's action. Rejected outside `PlayerTurn`; an
    /// unusable skill is rejected without spending the turn.
    pub fn player_act(
        &mut self,
        action: &CombatAction,
        stats: &DerivedStats,
        skills: &[Skill],
        rng: &mut impl Rng,
    ) -> Result<Vec<CombatEvent>, GameError> {
        if transition(self.phase, Trigger::PlayerActed(PendingPhase::EnemyTurn)).is_none() {
            return Err(match self.phase {
                CombatPhase::Idle | CombatPhase::Finished(_) => GameError::NotInCombat,
                _ => GameError::NotPlayerTurn,
            });
        }

        let mut events = Vec::new();
        let next = match action {
            CombatAction::Attack => {
                let was_crit = roll_chance(stats.crit_chance, rng);
                let damage = physical_attack_damage(stats, self.enemy.defense, was_crit);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::PlayerAttack { damage, was_crit });
                self.after_player_hit(&mut events)
            }
            CombatAction::Skill(skill_id) => {
                let skill = skills
                    .iter()
                    .find(|s| &s.id == skill_id && s.is_combat_ready())
                    .ok_or(GameError::SkillNotUsable)?;
                let was_crit = roll_chance(stats.skill_crit_chance, rng);
                let base = skill_base_damage(stats, skill);
                let damage = skill_attack_damage(base, self.enemy.defense, was_crit);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::SkillAttack {
                    skill: skill.name.clone(),
                    damage,
                    was_crit,
                });
                self.after_player_hit(&mut events)
            }
            CombatAction::Potion => {
                let healed = potion_heal_amount(self.player_max_hp);
                self.player_hp = (self.player_hp + healed).min(self.player_max_hp);
                events.push(CombatEvent::PotionUsed { healed });
                PendingPhase::EnemyTurn
            }
            CombatAction::Flee => {
                if roll_chance(stats.flee_chance, rng) {
                    events.push(CombatEvent::FleeSucceeded);
                    PendingPhase::Finished(CombatOutcome::Fled)
                } else {
                    events.push(CombatEvent::FleeFailed);
                    PendingPhase::EnemyTurn
                }
            }
        };

        self.apply(Trigger::PlayerActed(next))?;
        self.log.extend(events.iter().cloned());
        Ok(events)
    }

    fn after_player_hit(&self, events: &mut Vec<CombatEvent>) -> PendingPhase {
        if self.enemy.is_alive() {
            PendingPhase::EnemyTurn
        } else {
            events.push(CombatEvent::EnemyDefeated {
                enemy: self.enemy.name.clone(),
            });
            PendingPhase::Finished(CombatOutcome::Victory)
        }
    }

    /// Ends a `Resolving` pause.
    pub fn resolve(&mut self) -> Result<CombatPhase, GameError> {
        self.apply(Trigger::DelayElapsed)
    }

    /// The enemy's turn: a flat attack reduced by the player's defense.
    pub fn enemy_act(&mut self, player_defense: u32) -> Result<Vec<CombatEvent>, GameError> {
        if self.phase != CombatPhase::EnemyTurn {
            return Err(GameError::NotInCombat);
        }
        let damage = enemy_attack_damage(self.enemy.attack, player_defense);
        self.player_hp = self.player_hp.saturating_sub(damage);

        let mut events = vec![CombatEvent::EnemyAttack {
            enemy: self.enemy.name.clone(),
            damage,
        }];
        let player_alive = self.player_hp > 0;
        if !player_alive {
            events.push(CombatEvent::PlayerDefeated);
        }

        self.apply(Trigger::EnemyActed { player_alive })?;
        self.log.extend(events.iter().cloned());
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::{Stat, Stats};
    use crate::combat::data::find_enemy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn stats(str_: u32, agi: u32, per: u32) -> DerivedStats {
        let mut s = Stats::new();
        s.set(Stat::Str, str_);
        s.set(Stat::Agi, agi);
        s.set(Stat::Per, per);
        DerivedStats::from_stats(s, 160)
    }

    fn goblin_fight() -> CombatEncounter {
        let mut enc = CombatEncounter::new(find_enemy("goblin").unwrap(), 160, 160);
        enc.start().unwrap();
        enc
    }

    #[test]
    fn test_transition_table() {
        use CombatPhase as P;
        assert_eq!(transition(P::Idle, Trigger::Start), Some(P::PlayerTurn));
        assert_eq!(transition(P::PlayerTurn, Trigger::Start), None);
        assert_eq!(transition(P::EnemyTurn, Trigger::DelayElapsed), None);
        assert_eq!(
            transition(P::Resolving(PendingPhase::EnemyTurn), Trigger::DelayElapsed),
            Some(P::EnemyTurn)
        );
        assert_eq!(
            transition(
                P::Finished(CombatOutcome::Victory),
                Trigger::PlayerActed(PendingPhase::EnemyTurn)
            ),
            None
        );
    }

    #[test]
    fn test_attack_then_enemy_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut enc = goblin_fight();

        // PER 0 means no crits: (10*5 + 0) - 5*0.5 = 47.5 -> 47
        let events = enc
            .player_act(&CombatAction::Attack, &stats(10, 0, 0), &[], &mut rng)
            .unwrap();
        assert_eq!(
            events,
            vec![CombatEvent::PlayerAttack {
                damage: 47,
                was_crit: false
            }]
        );
        assert_eq!(enc.enemy.current_hp, 53);
        assert_eq!(enc.phase(), CombatPhase::Resolving(PendingPhase::EnemyTurn));

        // Nothing else is accepted while resolving
        assert_eq!(
            enc.player_act(&CombatAction::Attack, &stats(10, 0, 0), &[], &mut rng),
            Err(GameError::NotPlayerTurn)
        );
        assert_eq!(enc.enemy_act(0), Err(GameError::NotInCombat));

        assert_eq!(enc.resolve().unwrap(), CombatPhase::EnemyTurn);
        let events = enc.enemy_act(0).unwrap();
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                enemy: "Lowly Goblin".to_string(),
                damage: 10
            }]
        );
        assert_eq!(enc.player_hp, 150);
        assert_eq!(enc.phase(), CombatPhase::PlayerTurn);
    }

    #[test]
    fn test_killing_blow_goes_to_victory() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut enc = goblin_fight();

        enc.player_act(&CombatAction::Attack, &stats(40, 0, 0), &[], &mut rng)
            .unwrap();
        assert_eq!(enc.enemy.current_hp, 0);
        assert_eq!(
            enc.phase(),
            CombatPhase::Resolving(PendingPhase::Finished(CombatOutcome::Victory))
        );
        assert_eq!(enc.outcome(), None);

        enc.resolve().unwrap();
        assert_eq!(enc.outcome(), Some(CombatOutcome::Victory));
        assert_eq!(
            enc.player_act(&CombatAction::Attack, &stats(40, 0, 0), &[], &mut rng),
            Err(GameError::NotInCombat)
        );
    }

    #[test]
    fn test_enemy_kills_player() {
        let mut enc = CombatEncounter::new(find_enemy("orc").unwrap(), 20, 160);
        enc.start().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        enc.player_act(&CombatAction::Potion, &stats(0, 0, 0), &[], &mut rng)
            .unwrap();
        // 20 + 48 healed
        assert_eq!(enc.player_hp, 68);
        enc.resolve().unwrap();
        enc.enemy_act(0).unwrap();
        enc.enemy_act(0).unwrap_err();
        assert_eq!(enc.player_hp, 43);

        let mut turns = 0;
        while !enc.phase().is_finished() && turns < 20 {
            match enc.phase() {
                CombatPhase::PlayerTurn => {
                    enc.player_act(&CombatAction::Attack, &stats(0, 0, 0), &[], &mut rng)
                        .unwrap();
                }
                CombatPhase::EnemyTurn => {
                    enc.enemy_act(0).unwrap();
                }
                CombatPhase::Resolving(_) => {
                    enc.resolve().unwrap();
                }
                _ => unreachable!(),
            }
            turns += 1;
        }
        assert_eq!(enc.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(enc.player_hp, 0);
        assert_eq!(enc.log().last(), Some(&CombatEvent::PlayerDefeated));
    }

    #[test]
    fn test_potion_caps_at_max() {
        let mut enc = goblin_fight();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        enc.player_act(&CombatAction::Potion, &stats(0, 0, 0), &[], &mut rng)
            .unwrap();
        assert_eq!(enc.player_hp, 160);
        assert_eq!(enc.phase(), CombatPhase::Resolving(PendingPhase::EnemyTurn));
    }

    #[test]
    fn test_flee_with_certain_chance() {
        let mut enc = goblin_fight();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // 0.3 + 40*0.02 clamps to 1.0
        let events = enc
            .player_act(&CombatAction::Flee, &stats(0, 40, 0), &[], &mut rng)
            .unwrap();
        assert_eq!(events, vec![CombatEvent::FleeSucceeded]);
        enc.resolve().unwrap();
        assert_eq!(enc.outcome(), Some(CombatOutcome::Fled));
    }

    #[test]
    fn test_skill_requires_learned_skill() {
        let mut state_skills = crate::skills::data::initial_skills();
        let mut enc = goblin_fight();
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let action = CombatAction::Skill("combat-mastery".to_string());
        assert_eq!(
            enc.player_act(&action, &stats(20, 0, 0), &state_skills, &mut rng),
            Err(GameError::SkillNotUsable)
        );
        assert_eq!(enc.phase(), CombatPhase::PlayerTurn);

        state_skills[0].level = 1;
        // floor(20*5*0.10) = 10; 10 - 5*0.3 = 8.5 -> 8
        let events = enc
            .player_act(&action, &stats(20, 0, 0), &state_skills, &mut rng)
            .unwrap();
        assert_eq!(
            events,
            vec![CombatEvent::SkillAttack {
                skill: "Combat Mastery".to_string(),
                damage: 8,
                was_crit: false
            }]
        );
        assert_eq!(enc.enemy.current_hp, 92);
    }

    #[test]
    fn test_idle_rejects_actions() {
        let mut enc = CombatEncounter::new(find_enemy("wolf").unwrap(), 100, 100);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert_eq!(
            enc.player_act(&CombatAction::Attack, &stats(1, 1, 1), &[], &mut rng),
            Err(GameError::NotInCombat)
        );
        assert_eq!(enc.phase(), CombatPhase::Idle);
    }
}
