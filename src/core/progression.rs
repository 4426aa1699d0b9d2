//! Experience, leveling, attribute points and currency.

use super::constants::*;
use super::error::GameError;
use super::game_state::PlayerState;
use crate::character::attributes::Stat;
use log::info;

/// What a single experience gain did to the character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
    pub physical_points: u32,
    pub mental_points: u32,
    pub skill_points: u32,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Next threshold after a level-up: the previous one grown by 1.5, floored.
pub fn next_threshold(current: u64) -> u64 {
    (current as f64 * EXP_THRESHOLD_GROWTH).floor() as u64
}

/// Adds experience and processes every threshold crossed.
///
/// Each crossing raises the level by one, carries the leftover into the new
/// level, grows the threshold, and grants 3 physical and 1 mental point plus
/// a skill point whenever the new level is a multiple of 3.
pub fn gain_experience(state: &mut PlayerState, amount: u64) -> LevelUpReport {
    state.exp += amount;

    let mut report = LevelUpReport {
        new_level: state.level,
        ..LevelUpReport::default()
    };

    while state.exp_to_next_level > 0 && state.exp >= state.exp_to_next_level {
        state.exp -= state.exp_to_next_level;
        state.level += 1;
        state.exp_to_next_level = next_threshold(state.exp_to_next_level);

        state.available_stat_points.physical += LEVEL_UP_PHYSICAL_POINTS;
        state.available_stat_points.mental += LEVEL_UP_MENTAL_POINTS;
        report.physical_points += LEVEL_UP_PHYSICAL_POINTS;
        report.mental_points += LEVEL_UP_MENTAL_POINTS;

        if state.level % SKILL_POINT_LEVEL_INTERVAL == 0 {
            state.available_skill_points += 1;
            report.skill_points += 1;
        }

        report.levels_gained += 1;
        info!("level up: now level {}", state.level);
    }

    report.new_level = state.level;
    report
}

/// Raises a stat without touching the point pools and applies the resource
/// side effects: VIT rebuilds max HP, INT rebuilds max IP, both refill.
pub fn apply_stat_gain(state: &mut PlayerState, stat: Stat, amount: u32) {
    state.stats.add(stat, amount);
    refresh_resources(state, stat);
}

/// Lowers a stat (clamped at zero) without refunding points.
pub fn lower_stat(state: &mut PlayerState, stat: Stat, amount: u32) {
    state.stats.sub(stat, amount);
    refresh_resources(state, stat);
}

fn refresh_resources(state: &mut PlayerState, stat: Stat) {
    match stat {
        Stat::Vit => {
            state.max_hp = BASE_HP + state.stat(Stat::Vit) * HP_PER_VIT;
            state.hp = state.max_hp;
        }
        Stat::Int => {
            state.max_ip = BASE_IP + state.stat(Stat::Int) * IP_PER_INT;
            state.ip = state.max_ip;
        }
        _ => {}
    }
}

/// Spends `amount` points from the stat's pool and raises the stat.
pub fn spend_stat_point(state: &mut PlayerState, stat: Stat, amount: u32) -> Result<(), GameError> {
    if amount == 0 {
        return Err(GameError::InvalidAmount);
    }
    let category = stat.category();
    if !state.available_stat_points.try_spend(category, amount) {
        return Err(GameError::NotEnoughStatPoints { category });
    }
    apply_stat_gain(state, stat, amount);
    Ok(())
}

/// Credits coins. Zero is a no-op.
pub fn add_coins(state: &mut PlayerState, amount: u64) {
    state.coins = state.coins.saturating_add(amount);
}

/// Debits coins, refusing when the balance is short.
pub fn remove_coins(state: &mut PlayerState, amount: u64) -> Result<(), GameError> {
    if state.coins < amount {
        return Err(GameError::NotEnoughCoins { needed: amount });
    }
    state.coins -= amount;
    Ok(())
}

pub fn add_skill_points(state: &mut PlayerState, amount: u32) {
    state.available_skill_points = state.available_skill_points.saturating_add(amount);
}
