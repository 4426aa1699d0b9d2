use super::data::daily_quests;
use super::types::{Quest, QuestRewards};
use crate::core::constants::DAILY_RESET_INTERVAL_MS;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::core::progression::{add_coins, gain_experience, LevelUpReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompletion {
    pub title: String,
    pub rewards: QuestRewards,
    pub level_up: LevelUpReport,
}

/// Adds a quest to the regular list, always marked incomplete.
pub fn add_quest(state: &mut PlayerState, mut quest: Quest) {
    quest.is_completed = false;
    state.quests.push(quest);
}

/// Marks a quest (regular or daily) complete and pays its rewards.
///
/// Completion is one-way: a completed quest is rejected, so its rewards
/// can only ever be applied once.
pub fn complete_quest(state: &mut PlayerState, quest_id: &str) -> Result<QuestCompletion, GameError> {
    let quest = state
        .quests
        .iter_mut()
        .chain(state.daily_quests.iter_mut())
        .find(|q| q.id == quest_id)
        .ok_or(GameError::QuestNotFound)?;

    if quest.is_completed {
        return Err(GameError::QuestAlreadyCompleted {
            title: quest.title.clone(),
        });
    }
    quest.is_completed = true;
    let title = quest.title.clone();
    let rewards = quest.rewards;

    add_coins(state, rewards.coins);
    let level_up = gain_experience(state, rewards.exp);

    Ok(QuestCompletion {
        title,
        rewards,
        level_up,
    })
}

pub fn daily_reset_due(state: &PlayerState, now_ms: i64) -> bool {
    now_ms - state.last_daily_quest_reset >= DAILY_RESET_INTERVAL_MS
}

/// Replaces the daily quest batch and stamps the reset time.
pub fn reset_daily_quests(state: &mut PlayerState, now_ms: i64) {
    state.daily_quests = daily_quests(now_ms);
    state.last_daily_quest_reset = now_ms;
}

/// Resets the dailies when a full day has passed. Returns whether it did.
pub fn check_and_reset_daily_quests(state: &mut PlayerState, now_ms: i64) -> bool {
    if daily_reset_due(state, now_ms) {
        reset_daily_quests(state, now_ms);
        true
    } else {
        false
    }
}
