use super::constants::*;
use crate::character::attributes::{Stat, StatPools, Stats};
use crate::items::equipment::Equipment;
use crate::items::types::Item;
use crate::quests::data::starting_quests;
use crate::quests::types::Quest;
use crate::skills::data::initial_skills;
use crate::skills::types::Skill;
use serde::{Deserialize, Serialize};

/// The whole persisted player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub job: String,
    pub title: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub ip: u32,
    pub max_ip: u32,
    pub exp: u64,
    pub exp_to_next_level: u64,
    pub stats: Stats,
    pub coins: u64,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub daily_quests: Vec<Quest>,
    #[serde(default = "initial_skills")]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub available_skill_points: u32,
    #[serde(default)]
    pub available_stat_points: StatPools,
    /// Unix time (ms) of the last daily quest batch; 0 forces a reset.
    #[serde(default)]
    pub last_daily_quest_reset: i64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlayerState {
    /// Creates the starting record. `current_time_ms` stamps the daily
    /// quest reset so a fresh character is not handed dailies immediately.
    pub fn new(current_time_ms: i64) -> Self {
        Self {
            name: STARTING_NAME.to_string(),
            job: "NONE".to_string(),
            title: "NONE".to_string(),
            level: STARTING_LEVEL,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            ip: STARTING_IP,
            max_ip: STARTING_IP,
            exp: 0,
            exp_to_next_level: STARTING_EXP_TO_NEXT_LEVEL,
            stats: Stats::new(),
            coins: STARTING_COINS,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            quests: starting_quests(),
            daily_quests: Vec::new(),
            skills: initial_skills(),
            available_skill_points: 0,
            available_stat_points: StatPools {
                physical: STARTING_PHYSICAL_POINTS,
                mental: STARTING_MENTAL_POINTS,
            },
            last_daily_quest_reset: current_time_ms,
        }
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id == item_id)
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.inventory.iter().filter(|item| item.is_equipped)
    }

    /// Iterates regular quests followed by daily quests.
    pub fn all_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().chain(self.daily_quests.iter())
    }

    pub fn find_skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == skill_id)
    }
}
