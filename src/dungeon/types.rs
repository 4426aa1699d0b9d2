//! Dungeon run data structures.

use crate::items::types::Rank;
use serde::{Deserialize, Serialize};

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DungeonStep {
    /// Entered but not moving yet
    Preparation,
    /// Advancing on the step timer
    Exploration,
    /// Paused on a monster until it is fought or avoided
    Combat,
    /// Exploration finished; rewards are waiting to be claimed
    Reward,
    Completed,
    Retreated,
}

impl DungeonStep {
    pub fn is_over(&self) -> bool {
        matches!(self, DungeonStep::Completed | DungeonStep::Retreated)
    }
}

/// Outcome of an encounter roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encounter {
    Monster,
    Treasure { coins: u64 },
    Trap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonRewards {
    pub coins: u64,
    pub exp: u64,
}

/// A single dungeon run bound to a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonRun {
    pub quest_id: String,
    pub quest_title: String,
    pub rank: Rank,
    pub step: DungeonStep,
    /// 0..=100
    pub progress: u32,
    /// Coins picked up along the way (treasure and monsters).
    pub found_coins: u64,
    pub encounters: Vec<Encounter>,
    /// Set once exploration reaches 100.
    pub rewards: Option<DungeonRewards>,
    pub message: &'static str,
}

/// Events produced while exploring, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DungeonEvent {
    Advanced { progress: u32 },
    MonsterEncountered,
    TreasureFound { coins: u64 },
    TrapTriggered,
    MonsterDefeated { coins: u64 },
    MonsterAvoided,
    ExplorationComplete { rewards: DungeonRewards },
}

impl DungeonEvent {
    /// Player-facing text, for the events worth announcing.
    pub fn message(&self) -> Option<String> {
        match self {
            DungeonEvent::Advanced { .. } => None,
            DungeonEvent::MonsterEncountered => Some("A monster blocks the way!".to_string()),
            DungeonEvent::TreasureFound { coins } => {
                Some(format!("Found treasure! +{} coins", coins))
            }
            DungeonEvent::TrapTriggered => Some("You triggered a trap! Careful!".to_string()),
            DungeonEvent::MonsterDefeated { coins } => Some(format!(
                "Victory! You defeated the monster. +{} coins",
                coins
            )),
            DungeonEvent::MonsterAvoided => Some("You retreated from combat.".to_string()),
            DungeonEvent::ExplorationComplete { rewards } => Some(format!(
                "Dungeon cleared! Rewards: {} coins, {} EXP",
                rewards.coins, rewards.exp
            )),
        }
    }
}
