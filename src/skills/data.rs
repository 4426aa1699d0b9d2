//! Starting skill list.

use super::types::{Skill, SkillEffect};
use crate::character::attributes::Stat;
use std::collections::BTreeMap;

struct SkillDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    max_level: u32,
    required_level: u32,
    stat_requirements: &'static [(Stat, u32)],
    parent: Option<&'static str>,
    unlocked: bool,
    effects: &'static [(&'static str, f64, f64)],
}

const SKILL_DEFS: [SkillDef; 6] = [
    SkillDef {
        id: "combat-mastery",
        name: "Combat Mastery",
        description: "Basic combat techniques that increase your effectiveness in battle.",
        max_level: 5,
        required_level: 1,
        stat_requirements: &[],
        parent: None,
        unlocked: true,
        effects: &[("Attack power", 10.0, 5.0), ("Critical hit chance", 3.0, 1.0)],
    },
    SkillDef {
        id: "physical-enhancement",
        name: "Physical Enhancement",
        description: "Strengthen your body beyond normal human limits.",
        max_level: 3,
        required_level: 3,
        stat_requirements: &[(Stat::Str, 10)],
        parent: Some("combat-mastery"),
        unlocked: false,
        effects: &[("STR bonus", 5.0, 5.0), ("VIT bonus", 5.0, 5.0)],
    },
    SkillDef {
        id: "dagger-proficiency",
        name: "Dagger Proficiency",
        description: "Master the art of dagger combat, enabling rapid strikes.",
        max_level: 4,
        required_level: 2,
        stat_requirements: &[(Stat::Agi, 5)],
        parent: Some("combat-mastery"),
        unlocked: false,
        effects: &[
            ("Attack speed", 10.0, 5.0),
            ("Chance to inflict bleeding", 5.0, 3.0),
        ],
    },
    SkillDef {
        id: "mana-control",
        name: "Mana Control",
        description: "Learn to manipulate mana more efficiently.",
        max_level: 5,
        required_level: 3,
        stat_requirements: &[(Stat::Int, 10)],
        parent: None,
        unlocked: false,
        effects: &[("IP efficiency", 10.0, 5.0), ("Magic damage", 5.0, 3.0)],
    },
    SkillDef {
        id: "shadow-extraction",
        name: "Shadow Extraction",
        description: "Extract and store shadows from defeated enemies.",
        max_level: 1,
        required_level: 10,
        stat_requirements: &[(Stat::Int, 20), (Stat::Cmd, 15)],
        parent: None,
        unlocked: false,
        effects: &[("Shadow storage capacity", 1.0, 0.0)],
    },
    SkillDef {
        id: "shadow-soldier",
        name: "Shadow Soldier",
        description: "Command your extracted shadows to fight alongside you.",
        max_level: 3,
        required_level: 15,
        stat_requirements: &[],
        parent: Some("shadow-extraction"),
        unlocked: false,
        effects: &[
            ("Shadow soldier strength", 20.0, 15.0),
            ("Max shadow soldiers", 1.0, 1.0),
        ],
    },
];

pub fn initial_skills() -> Vec<Skill> {
    SKILL_DEFS
        .iter()
        .map(|def| Skill {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            level: 0,
            max_level: def.max_level,
            required_level: def.required_level,
            stat_requirements: def.stat_requirements.iter().copied().collect::<BTreeMap<_, _>>(),
            parent_skill_id: def.parent.map(str::to_string),
            unlocked: def.unlocked,
            effects: def
                .effects
                .iter()
                .map(|(desc, value, per_level)| SkillEffect::new(desc, *value, *per_level))
                .collect(),
            skill_points: 0,
        })
        .collect()
}
