use super::attributes::{Stat, Stats};
use crate::core::constants::*;
use crate::core::game_state::PlayerState;

/// Numbers derived from the player's attributes. Combat derives them from
/// the bare attributes; the status screen adds equipped buffs and debuffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub stats: Stats,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
    pub skill_crit_chance: f64,
    pub flee_chance: f64,
    pub max_hp: u32,
}

impl DerivedStats {
    /// Derived stats from bare attributes, ignoring equipment.
    pub fn from_stats(stats: Stats, max_hp: u32) -> Self {
        let str_ = stats.get(Stat::Str);
        let agi = stats.get(Stat::Agi);
        let vit = stats.get(Stat::Vit);
        let per = stats.get(Stat::Per) as f64;

        Self {
            stats,
            // Attack = STR×5 + AGI×2
            attack: str_ * ATTACK_PER_STR + agi * ATTACK_PER_AGI,
            // Defense = VIT×3
            defense: vit * DEFENSE_PER_VIT,
            crit_chance: (per * CRIT_CHANCE_PER_PER).min(1.0),
            skill_crit_chance: (per * SKILL_CRIT_CHANCE_PER_PER).min(1.0),
            flee_chance: (FLEE_BASE_CHANCE + agi as f64 * FLEE_CHANCE_PER_AGI).min(1.0),
            max_hp,
        }
    }

    /// Attributes with equipped buffs added and debuffs subtracted (never
    /// below zero), then derived.
    pub fn calculate(state: &PlayerState) -> Self {
        Self::from_stats(effective_stats(state), state.max_hp)
    }
}

pub fn effective_stats(state: &PlayerState) -> Stats {
    let mut stats = state.stats;
    for item in state.equipped_items() {
        for (stat, amount) in &item.buffs {
            stats.add(*stat, *amount);
        }
    }
    for item in state.equipped_items() {
        for (stat, amount) in &item.debuffs {
            stats.sub(*stat, *amount);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::inventory::{add_item, equip_item};
    use crate::items::types::{Item, Rank};

    #[test]
    fn test_base_derivation() {
        let mut stats = Stats::new();
        stats.set(Stat::Str, 10);
        stats.set(Stat::Agi, 5);
        stats.set(Stat::Vit, 4);
        stats.set(Stat::Per, 20);

        let derived = DerivedStats::from_stats(stats, 180);
        assert_eq!(derived.attack, 60);
        assert_eq!(derived.defense, 12);
        assert!((derived.crit_chance - 0.2).abs() < 1e-9);
        assert!((derived.skill_crit_chance - 0.3).abs() < 1e-9);
        assert!((derived.flee_chance - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_flee_chance_caps_at_one() {
        let mut stats = Stats::new();
        stats.set(Stat::Agi, 100);
        assert_eq!(DerivedStats::from_stats(stats, 100).flee_chance, 1.0);
    }

    #[test]
    fn test_equipment_buffs_and_debuffs() {
        let mut state = PlayerState::new(0);
        state.stats.set(Stat::Vit, 1);
        add_item(
            &mut state,
            Item::new("g", "Gauntlet", "GAUNTLET", Rank::S, 1)
                .with_buff(Stat::Agi, 20)
                .with_debuff(Stat::Vit, 3),
        );

        // Unequipped items do nothing
        assert_eq!(effective_stats(&state).get(Stat::Agi), 0);

        equip_item(&mut state, "g").unwrap();
        let stats = effective_stats(&state);
        assert_eq!(stats.get(Stat::Agi), 20);
        assert_eq!(stats.get(Stat::Vit), 0);
        // Base attributes untouched
        assert_eq!(state.stat(Stat::Agi), 0);
    }
}
