//! Rule violations raised by engine operations.
//!
//! Every variant renders as the message shown to the player. Nothing here is
//! fatal: the [`Game`](super::game::Game) controller turns each error into an
//! error notification and leaves the state untouched.

use crate::character::attributes::{Stat, StatCategory};
use crate::items::types::Rank;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough {category} stat points available!")]
    NotEnoughStatPoints { category: StatCategory },

    #[error("Stat amount must be at least 1")]
    InvalidAmount,

    #[error("Not enough coins! Need {needed} coins.")]
    NotEnoughCoins { needed: u64 },

    #[error("Item not found in inventory!")]
    ItemNotFound,

    #[error("{name} cannot be equipped")]
    NotEquippable { name: String },

    #[error("{name} is already equipped!")]
    AlreadyEquipped { name: String },

    #[error("Item is not equipped!")]
    NotEquipped,

    #[error("Quest not found!")]
    QuestNotFound,

    #[error("{title} is already completed!")]
    QuestAlreadyCompleted { title: String },

    #[error("Skill not found!")]
    SkillNotFound,

    #[error("{name} is already unlocked!")]
    SkillAlreadyUnlocked { name: String },

    #[error("{name} is not unlocked yet!")]
    SkillLocked { name: String },

    #[error("{name} is already at max level!")]
    SkillMaxLevel { name: String },

    #[error("You need to be level {required} to unlock this skill!")]
    LevelTooLow { required: u32 },

    #[error("You need {stat} {required} to unlock this skill!")]
    StatRequirementUnmet { stat: Stat, required: u32 },

    #[error("You need to upgrade {parent} first!")]
    ParentSkillNotLearned { parent: String },

    #[error("Not enough skill points!")]
    NotEnoughSkillPoints,

    #[error("Already training!")]
    AlreadyTraining,

    #[error("{stat} cannot be trained")]
    NotTrainable { stat: Stat },

    #[error("Not in combat!")]
    NotInCombat,

    #[error("Already in combat!")]
    AlreadyInCombat,

    #[error("Enemy not found!")]
    EnemyNotFound,

    #[error("It is not your turn!")]
    NotPlayerTurn,

    #[error("That skill cannot be used in combat!")]
    SkillNotUsable,

    #[error("Already exploring a dungeon!")]
    AlreadyExploring,

    #[error("Not exploring a dungeon!")]
    NotExploring,

    #[error("That cannot be done right now!")]
    InvalidDungeonStep,

    #[error("You cannot buy anything at your level")]
    ShopLocked,

    #[error("You need to be at least level {required} to purchase {rank}-rank quests!")]
    RankLocked { rank: Rank, required: u32 },

    #[error("Nothing by that name is for sale!")]
    NotForSale,
}
