//! Dungeon exploration state machine.
//!
//! A run advances in fixed steps driven by the caller's timer. Randomness
//! comes in through `&mut impl Rng`; nothing here reads the clock.

use super::types::{DungeonEvent, DungeonRewards, DungeonRun, DungeonStep, Encounter};
use crate::core::constants::*;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::core::progression::{add_coins, gain_experience, LevelUpReport};
use crate::items::types::Rank;
use crate::quests::logic::{complete_quest, QuestCompletion};
use crate::quests::types::Quest;
use log::info;
use rand::Rng;

const PROGRESS_MESSAGES: [&str; 5] = [
    "Entering the dungeon...",
    "Navigating dark corridors...",
    "Exploring unknown territory...",
    "Detecting traces of monsters...",
    "Proceeding carefully...",
];

/// Rewards for finishing a run: found coins plus the rank-scaled base.
pub fn calculate_rewards(rank: Rank, found_coins: u64) -> DungeonRewards {
    let multiplier = rank.reward_multiplier();
    DungeonRewards {
        coins: found_coins + DUNGEON_BASE_COINS * multiplier,
        exp: DUNGEON_BASE_EXP * multiplier,
    }
}

pub fn roll_encounter(rng: &mut impl Rng) -> Encounter {
    let roll: f64 = rng.gen();
    if roll < DUNGEON_MONSTER_CHANCE {
        Encounter::Monster
    } else if roll < DUNGEON_TREASURE_CHANCE {
        Encounter::Treasure {
            coins: rng.gen_range(DUNGEON_TREASURE_COINS_MIN..=DUNGEON_TREASURE_COINS_MAX),
        }
    } else {
        Encounter::Trap
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonClaim {
    pub rewards: DungeonRewards,
    pub level_up: LevelUpReport,
    /// `None` when the quest had already been completed elsewhere.
    pub quest: Option<QuestCompletion>,
}

impl DungeonRun {
    /// A run for a pending quest. Completed quests cannot be run again.
    pub fn for_quest(quest: &Quest) -> Result<Self, GameError> {
        if quest.is_completed {
            return Err(GameError::QuestAlreadyCompleted {
                title: quest.title.clone(),
            });
        }
        Ok(Self {
            quest_id: quest.id.clone(),
            quest_title: quest.title.clone(),
            rank: quest.rank,
            step: DungeonStep::Preparation,
            progress: 0,
            found_coins: 0,
            encounters: Vec::new(),
            rewards: None,
            message: "",
        })
    }

    pub fn begin(&mut self) -> Result<(), GameError> {
        if self.step != DungeonStep::Preparation {
            return Err(GameError::InvalidDungeonStep);
        }
        self.step = DungeonStep::Exploration;
        self.message = PROGRESS_MESSAGES[0];
        Ok(())
    }

    /// One exploration step: +5 progress, an encounter roll at the fixed
    /// encounter points, and the reward calculation at 100.
    pub fn advance(&mut self, rng: &mut impl Rng) -> Result<Vec<DungeonEvent>, GameError> {
        if self.step != DungeonStep::Exploration {
            return Err(GameError::InvalidDungeonStep);
        }

        self.progress = (self.progress + DUNGEON_PROGRESS_PER_STEP).min(100);
        let mut events = vec![DungeonEvent::Advanced {
            progress: self.progress,
        }];

        if self.progress % 20 == 0 {
            self.message = PROGRESS_MESSAGES[(self.progress / 20) as usize % PROGRESS_MESSAGES.len()];
        }

        if DUNGEON_ENCOUNTER_POINTS.contains(&self.progress) {
            let encounter = roll_encounter(rng);
            self.encounters.push(encounter);
            match encounter {
                Encounter::Monster => {
                    self.step = DungeonStep::Combat;
                    events.push(DungeonEvent::MonsterEncountered);
                    return Ok(events);
                }
                Encounter::Treasure { coins } => {
                    self.found_coins += coins;
                    events.push(DungeonEvent::TreasureFound { coins });
                }
                Encounter::Trap => events.push(DungeonEvent::TrapTriggered),
            }
        }

        if self.progress >= 100 {
            let rewards = calculate_rewards(self.rank, self.found_coins);
            self.rewards = Some(rewards);
            self.step = DungeonStep::Reward;
            events.push(DungeonEvent::ExplorationComplete { rewards });
        }

        Ok(events)
    }

    /// Settles a monster encounter. Fighting always wins and drops coins;
    /// avoiding it drops nothing. Either way exploration resumes.
    pub fn resolve_monster(&mut self, fight: bool, rng: &mut impl Rng) -> Result<DungeonEvent, GameError> {
        if self.step != DungeonStep::Combat {
            return Err(GameError::InvalidDungeonStep);
        }
        self.step = DungeonStep::Exploration;
        if fight {
            let coins = rng.gen_range(DUNGEON_MONSTER_COINS_MIN..=DUNGEON_MONSTER_COINS_MAX);
            self.found_coins += coins;
            Ok(DungeonEvent::MonsterDefeated { coins })
        } else {
            Ok(DungeonEvent::MonsterAvoided)
        }
    }
}

/// Pays out a finished run and completes its quest.
///
/// A quest completed while the run was underway keeps its one-time rewards;
/// the run still pays the dungeon rewards and closes.
pub fn claim_rewards(state: &mut PlayerState, run: &mut DungeonRun) -> Result<DungeonClaim, GameError> {
    let rewards = match (run.step, run.rewards) {
        (DungeonStep::Reward, Some(rewards)) => rewards,
        _ => return Err(GameError::InvalidDungeonStep),
    };
    let quest_open = state
        .all_quests()
        .any(|q| q.id == run.quest_id && !q.is_completed);

    add_coins(state, rewards.coins);
    let level_up = gain_experience(state, rewards.exp);
    let quest = if quest_open {
        Some(complete_quest(state, &run.quest_id)?)
    } else {
        None
    };
    run.step = DungeonStep::Completed;

    info!(
        "dungeon '{}' cleared: {} coins, {} exp",
        run.quest_title, rewards.coins, rewards.exp
    );
    Ok(DungeonClaim {
        rewards,
        level_up,
        quest,
    })
}

/// Leaves a run early. Coins already found are kept; the quest stays open.
pub fn abandon_run(state: &mut PlayerState, run: &mut DungeonRun) -> Result<u64, GameError> {
    match run.step {
        DungeonStep::Preparation | DungeonStep::Exploration | DungeonStep::Combat => {
            add_coins(state, run.found_coins);
            run.step = DungeonStep::Retreated;
            Ok(run.found_coins)
        }
        _ => Err(GameError::InvalidDungeonStep),
    }
}
