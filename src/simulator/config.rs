//! Simulation configuration.

use crate::character::attributes::{Stat, Stats};
use crate::core::constants::{BASE_HP, HP_PER_VIT};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fights per enemy
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Only fight this enemy (None = whole roster)
    pub enemy_id: Option<String>,

    /// Player attributes for every fight
    pub stats: Stats,

    /// Skill used instead of a plain attack when it hits harder
    pub skill_id: Option<String>,
    pub skill_level: u32,

    /// Potions available per fight
    pub potions: u32,

    /// Drink a potion below this fraction of max HP
    pub potion_threshold: f64,

    /// Player turns before a fight counts as a stalemate
    pub max_turns: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per fight)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            enemy_id: None,
            stats: Stats::new(),
            skill_id: None,
            skill_level: 0,
            potions: 3,
            potion_threshold: 0.3,
            max_turns: 500,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A balanced build: `points` spread evenly over STR, VIT, AGI and PER.
    pub fn balanced_build(points: u32) -> Self {
        let share = points / 4;
        let mut stats = Stats::new();
        for stat in [Stat::Str, Stat::Vit, Stat::Agi, Stat::Per] {
            stats.set(stat, share);
        }
        Self {
            stats,
            ..Default::default()
        }
    }

    /// Quick config for testing one enemy.
    pub fn single_enemy(enemy_id: &str, num_runs: u32) -> Self {
        Self {
            num_runs,
            enemy_id: Some(enemy_id.to_string()),
            ..Default::default()
        }
    }

    /// Max HP for the configured VIT.
    pub fn max_hp(&self) -> u32 {
        BASE_HP + self.stats.get(Stat::Vit) * HP_PER_VIT
    }
}
