use crate::items::types::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub rank: Rank,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub reward_exp: u64,
    pub reward_coins: u64,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn reset_hp(&mut self) {
        self.current_hp = self.max_hp;
    }
}

/// What the player chooses to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Skill(String),
    Potion,
    Flee,
}

/// Final state of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Phases of the turn loop.
///
/// `Resolving` is the pause after an action lands; it names the phase the
/// encounter moves to once the delay elapses, so an encounter that hit zero
/// HP is already committed to its result and accepts no further action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    Idle,
    PlayerTurn,
    Resolving(PendingPhase),
    EnemyTurn,
    Finished(CombatOutcome),
}

/// Phase entered when a `Resolving` pause ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingPhase {
    PlayerTurn,
    EnemyTurn,
    Finished(CombatOutcome),
}

impl CombatPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, CombatPhase::Finished(_))
    }
}

/// One line of the combat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32, was_crit: bool },
    SkillAttack { skill: String, damage: u32, was_crit: bool },
    PotionUsed { healed: u32 },
    FleeSucceeded,
    FleeFailed,
    EnemyAttack { enemy: String, damage: u32 },
    EnemyDefeated { enemy: String },
    PlayerDefeated,
}

impl CombatEvent {
    pub fn message(&self) -> String {
        match self {
            CombatEvent::PlayerAttack { damage, was_crit } => {
                if *was_crit {
                    format!("Critical hit! {} damage", damage)
                } else {
                    format!("You attacked for {} damage", damage)
                }
            }
            CombatEvent::SkillAttack {
                skill,
                damage,
                was_crit,
            } => {
                let hit = if *was_crit { "critical hit!" } else { "hit!" };
                format!("{} {} {} damage", skill, hit, damage)
            }
            CombatEvent::PotionUsed { healed } => {
                format!("Used a potion and healed for {} HP!", healed)
            }
            CombatEvent::FleeSucceeded => "Successfully fled from combat!".to_string(),
            CombatEvent::FleeFailed => "Failed to flee!".to_string(),
            CombatEvent::EnemyAttack { enemy, damage } => {
                format!("{} attacks! {} damage", enemy, damage)
            }
            CombatEvent::EnemyDefeated { enemy } => format!("{} was defeated!", enemy),
            CombatEvent::PlayerDefeated => "You have been defeated!".to_string(),
        }
    }
}
