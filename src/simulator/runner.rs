//! Main simulation runner.

use super::combat_sim::{simulate_fight, FightStats};
use super::config::SimConfig;
use super::report::{EnemyReport, SimReport};
use crate::combat::data::enemy_roster;
use crate::skills::data::initial_skills;
use crate::skills::types::Skill;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The starting skill list with the configured skill learned.
fn prepared_skills(config: &SimConfig) -> Vec<Skill> {
    let mut skills = initial_skills();
    if let Some(id) = &config.skill_id {
        if let Some(skill) = skills.iter_mut().find(|s| &s.id == id) {
            skill.unlocked = true;
            skill.level = config.skill_level.clamp(1, skill.max_level);
        }
    }
    skills
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let skills = prepared_skills(config);
    let enemies: Vec<_> = enemy_roster()
        .into_iter()
        .filter(|e| config.enemy_id.as_ref().map_or(true, |id| &e.id == id))
        .collect();

    let mut reports = Vec::with_capacity(enemies.len());
    for (enemy_idx, enemy) in enemies.into_iter().enumerate() {
        let mut fights: Vec<FightStats> = Vec::with_capacity(config.num_runs as usize);

        for run_idx in 0..config.num_runs {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(
                    seed + (enemy_idx as u64) * config.num_runs as u64 + run_idx as u64,
                ),
                None => StdRng::from_entropy(),
            };
            let stats = simulate_fight(config, enemy.clone(), &skills, &mut rng);

            if config.verbosity >= 2 {
                println!(
                    "{} run {}/{} - {:?} in {} turns, dealt {}, taken {}",
                    enemy.name,
                    run_idx + 1,
                    config.num_runs,
                    stats.outcome,
                    stats.turns,
                    stats.damage_dealt,
                    stats.damage_taken
                );
            }
            fights.push(stats);
        }

        reports.push(EnemyReport::from_fights(&enemy.id, &enemy.name, &fights));
    }

    SimReport {
        runs_per_enemy: config.num_runs,
        enemies: reports,
    }
}
