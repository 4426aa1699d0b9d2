//! Skill unlocking and upgrading.

use super::tree::SkillTree;
use super::types::Skill;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;

fn locate(tree: &SkillTree, state: &PlayerState, skill_id: &str) -> Result<usize, GameError> {
    tree.position(skill_id)
        .filter(|&i| i < state.skills.len())
        .ok_or(GameError::SkillNotFound)
}

/// Checks every unlock precondition without changing anything.
pub fn can_unlock(tree: &SkillTree, state: &PlayerState, skill_id: &str) -> Result<(), GameError> {
    let index = locate(tree, state, skill_id)?;
    let skill = &state.skills[index];

    if skill.unlocked {
        return Err(GameError::SkillAlreadyUnlocked {
            name: skill.name.clone(),
        });
    }
    if state.level < skill.required_level {
        return Err(GameError::LevelTooLow {
            required: skill.required_level,
        });
    }
    for (&stat, &required) in &skill.stat_requirements {
        if state.stat(stat) < required {
            return Err(GameError::StatRequirementUnmet { stat, required });
        }
    }
    if let Some(parent_index) = tree.parent(index) {
        let parent = &state.skills[parent_index];
        if parent.level == 0 {
            return Err(GameError::ParentSkillNotLearned {
                parent: parent.name.clone(),
            });
        }
    }
    if state.available_skill_points == 0 {
        return Err(GameError::NotEnoughSkillPoints);
    }
    Ok(())
}

/// Unlocks a skill, consuming one skill point.
pub fn unlock_skill<'a>(
    tree: &SkillTree,
    state: &'a mut PlayerState,
    skill_id: &str,
) -> Result<&'a Skill, GameError> {
    can_unlock(tree, state, skill_id)?;
    let index = locate(tree, state, skill_id)?;

    state.available_skill_points -= 1;
    let skill = &mut state.skills[index];
    skill.unlocked = true;
    Ok(skill)
}

/// Raises an unlocked skill by one level, consuming one skill point.
pub fn upgrade_skill<'a>(
    tree: &SkillTree,
    state: &'a mut PlayerState,
    skill_id: &str,
) -> Result<&'a Skill, GameError> {
    let index = locate(tree, state, skill_id)?;
    let skill = &state.skills[index];

    if skill.level >= skill.max_level {
        return Err(GameError::SkillMaxLevel {
            name: skill.name.clone(),
        });
    }
    if !skill.unlocked {
        return Err(GameError::SkillLocked {
            name: skill.name.clone(),
        });
    }
    if state.available_skill_points == 0 {
        return Err(GameError::NotEnoughSkillPoints);
    }

    state.available_skill_points -= 1;
    let skill = &mut state.skills[index];
    skill.level += 1;
    skill.skill_points += 1;
    Ok(skill)
}
