//! Combat formulas.
//!
//! Pure functions with no hidden randomness: rolls happen in the callers,
//! which pass the outcome in as `is_crit`, so every formula can be checked
//! with fixed inputs.

use crate::character::attributes::Stat;
use crate::character::derived_stats::DerivedStats;
use crate::core::constants::*;
use crate::skills::types::Skill;
use rand::Rng;

/// Roll against a probability in [0, 1].
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    if chance <= 0.0 {
        return false;
    }
    rng.gen::<f64>() < chance
}

/// Applies a defense reduction and floors, never dealing less than 1.
fn mitigated(raw: f64, defense: u32, defense_factor: f64) -> u32 {
    let damage = (raw - defense as f64 * defense_factor).floor();
    if damage < 1.0 {
        1
    } else {
        damage as u32
    }
}

/// Physical attack: `(STR×5 + AGI×2) [×1.5 crit] − defense×0.5`, floored, min 1.
pub fn physical_attack_damage(stats: &DerivedStats, enemy_defense: u32, is_crit: bool) -> u32 {
    let mut raw = stats.attack as f64;
    if is_crit {
        raw *= CRIT_MULTIPLIER;
    }
    mitigated(raw, enemy_defense, ENEMY_DEFENSE_FACTOR)
}

/// Attack percent of a combat skill: the base value of its first effect
/// whose description mentions "Attack", or 100 when it has none.
pub fn skill_attack_percent(skill: &Skill) -> f64 {
    skill
        .effects
        .iter()
        .find(|e| e.description.contains("Attack"))
        .map(|e| e.value)
        .unwrap_or(DEFAULT_SKILL_ATTACK_PERCENT)
}

/// Base damage of a skill: `floor(STR×5 × attack%/100)`.
pub fn skill_base_damage(stats: &DerivedStats, skill: &Skill) -> u32 {
    let strength = stats.stats.get(Stat::Str) as f64;
    (strength * ATTACK_PER_STR as f64 * (skill_attack_percent(skill) / 100.0)).floor() as u32
}

/// Skill attack: `base [×1.8 crit] − defense×0.3`, floored, min 1.
pub fn skill_attack_damage(base_damage: u32, enemy_defense: u32, is_crit: bool) -> u32 {
    let mut raw = base_damage as f64;
    if is_crit {
        raw *= SKILL_CRIT_MULTIPLIER;
    }
    mitigated(raw, enemy_defense, SKILL_ENEMY_DEFENSE_FACTOR)
}

/// Enemy attack: `attack − player defense×0.5`, floored, min 1.
pub fn enemy_attack_damage(enemy_attack: u32, player_defense: u32) -> u32 {
    mitigated(enemy_attack as f64, player_defense, PLAYER_DEFENSE_FACTOR)
}

/// Potion heal amount: 30% of max HP, floored.
pub fn potion_heal_amount(max_hp: u32) -> u32 {
    (max_hp as f64 * POTION_HEAL_FRACTION).floor() as u32
}
