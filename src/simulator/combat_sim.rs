//! Single-fight simulation.

use super::config::SimConfig;
use crate::character::derived_stats::DerivedStats;
use crate::combat::encounter::CombatEncounter;
use crate::combat::logic::{physical_attack_damage, skill_attack_damage, skill_base_damage};
use crate::combat::types::{CombatAction, CombatEvent, CombatOutcome, CombatPhase, Enemy};
use crate::skills::types::Skill;
use rand::Rng;

/// What happened in one fight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FightStats {
    /// None when the turn limit ran out first
    pub outcome: Option<CombatOutcome>,
    pub turns: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub crits: u32,
    pub potions_used: u32,
}

fn choose_action(
    config: &SimConfig,
    encounter: &CombatEncounter,
    derived: &DerivedStats,
    skill: Option<&Skill>,
    potions_left: u32,
) -> CombatAction {
    let hp_fraction = encounter.player_hp as f64 / encounter.player_max_hp.max(1) as f64;
    if potions_left > 0 && hp_fraction < config.potion_threshold {
        return CombatAction::Potion;
    }
    if let Some(skill) = skill.filter(|s| s.is_combat_ready()) {
        let defense = encounter.enemy.defense;
        let skill_hit = skill_attack_damage(skill_base_damage(derived, skill), defense, false);
        if skill_hit > physical_attack_damage(derived, defense, false) {
            return CombatAction::Skill(skill.id.clone());
        }
    }
    CombatAction::Attack
}

/// Fights `enemy` to the end with no delays between phases.
pub fn simulate_fight(
    config: &SimConfig,
    enemy: Enemy,
    skills: &[Skill],
    rng: &mut impl Rng,
) -> FightStats {
    let max_hp = config.max_hp();
    let derived = DerivedStats::from_stats(config.stats, max_hp);
    let skill = config
        .skill_id
        .as_deref()
        .and_then(|id| skills.iter().find(|s| s.id == id));

    let mut encounter = CombatEncounter::new(enemy, max_hp, max_hp);
    let mut stats = FightStats::default();
    let mut potions_left = config.potions;

    loop {
        let events = match encounter.phase() {
            CombatPhase::Idle => {
                if encounter.start().is_err() {
                    break;
                }
                continue;
            }
            CombatPhase::PlayerTurn => {
                if stats.turns >= config.max_turns {
                    break;
                }
                stats.turns += 1;
                let action = choose_action(config, &encounter, &derived, skill, potions_left);
                if action == CombatAction::Potion {
                    potions_left -= 1;
                }
                match encounter.player_act(&action, &derived, skills, rng) {
                    Ok(events) => events,
                    Err(_) => break,
                }
            }
            CombatPhase::Resolving(_) => {
                if encounter.resolve().is_err() {
                    break;
                }
                continue;
            }
            CombatPhase::EnemyTurn => match encounter.enemy_act(derived.defense) {
                Ok(events) => events,
                Err(_) => break,
            },
            CombatPhase::Finished(outcome) => {
                stats.outcome = Some(outcome);
                break;
            }
        };

        for event in events {
            match event {
                CombatEvent::PlayerAttack { damage, was_crit }
                | CombatEvent::SkillAttack {
                    damage, was_crit, ..
                } => {
                    stats.damage_dealt += damage as u64;
                    if was_crit {
                        stats.crits += 1;
                    }
                }
                CombatEvent::EnemyAttack { damage, .. } => stats.damage_taken += damage as u64,
                CombatEvent::PotionUsed { .. } => stats.potions_used += 1,
                _ => {}
            }
        }
    }

    stats
}
