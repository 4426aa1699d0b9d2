use crate::character::attributes::Stat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEffect {
    pub description: String,
    /// Magnitude at level 0.
    pub value: f64,
    #[serde(default)]
    pub value_per_level: f64,
}

impl SkillEffect {
    pub fn new(description: &str, value: f64, value_per_level: f64) -> Self {
        Self {
            description: description.to_string(),
            value,
            value_per_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: u32,
    pub max_level: u32,
    pub required_level: u32,
    #[serde(default)]
    pub stat_requirements: BTreeMap<Stat, u32>,
    #[serde(default)]
    pub parent_skill_id: Option<String>,
    pub unlocked: bool,
    pub effects: Vec<SkillEffect>,
    /// Skill points invested through upgrades.
    #[serde(default)]
    pub skill_points: u32,
}

impl Skill {
    /// Magnitude of one effect at the skill's current level. Locked skills
    /// contribute nothing.
    pub fn effect_magnitude(&self, effect: &SkillEffect) -> f64 {
        if !self.unlocked {
            return 0.0;
        }
        effect.value + effect.value_per_level * self.level as f64
    }

    /// (description, magnitude) for every effect.
    pub fn current_effects(&self) -> Vec<(&str, f64)> {
        self.effects
            .iter()
            .map(|e| (e.description.as_str(), self.effect_magnitude(e)))
            .collect()
    }

    /// Usable as a combat skill: unlocked and trained at least once.
    pub fn is_combat_ready(&self) -> bool {
        self.unlocked && self.level > 0
    }
}
