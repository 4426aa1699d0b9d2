use serde::{Deserialize, Serialize};
use std::fmt;

/// The six hunter attributes. STR, VIT and AGI are physical; INT, PER and
/// CMD are mental.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stat {
    Str,
    Vit,
    Agi,
    Int,
    Per,
    Cmd,
}

/// Which unspent-point pool pays for a stat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatCategory {
    Physical,
    Mental,
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatCategory::Physical => write!(f, "physical"),
            StatCategory::Mental => write!(f, "mental"),
        }
    }
}

impl Stat {
    pub fn all() -> [Stat; 6] {
        [Stat::Str, Stat::Vit, Stat::Agi, Stat::Int, Stat::Per, Stat::Cmd]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Stat::Str => "STR",
            Stat::Vit => "VIT",
            Stat::Agi => "AGI",
            Stat::Int => "INT",
            Stat::Per => "PER",
            Stat::Cmd => "CMD",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Str => "Strength",
            Stat::Vit => "Vitality",
            Stat::Agi => "Agility",
            Stat::Int => "Intelligence",
            Stat::Per => "Perception",
            Stat::Cmd => "Command",
        }
    }

    pub fn category(&self) -> StatCategory {
        match self {
            Stat::Str | Stat::Vit | Stat::Agi => StatCategory::Physical,
            Stat::Int | Stat::Per | Stat::Cmd => StatCategory::Mental,
        }
    }

    /// Parses an abbreviation case-insensitively ("str", "VIT", ...).
    pub fn from_abbrev(s: &str) -> Option<Stat> {
        Stat::all()
            .into_iter()
            .find(|stat| stat.abbrev().eq_ignore_ascii_case(s.trim()))
    }

    fn index(&self) -> usize {
        match self {
            Stat::Str => 0,
            Stat::Vit => 1,
            Stat::Agi => 2,
            Stat::Int => 3,
            Stat::Per => 4,
            Stat::Cmd => 5,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    values: [u32; 6],
}

impl Stats {
    pub fn new() -> Self {
        Self { values: [0; 6] }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn add(&mut self, stat: Stat, amount: u32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(amount);
    }

    /// Lowers a stat, never below zero.
    pub fn sub(&mut self, stat: Stat, amount: u32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_sub(amount);
    }
}

/// Unspent attribute points, split by category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatPools {
    pub physical: u32,
    pub mental: u32,
}

impl StatPools {
    pub fn get(&self, category: StatCategory) -> u32 {
        match category {
            StatCategory::Physical => self.physical,
            StatCategory::Mental => self.mental,
        }
    }

    /// Takes `amount` points from a pool. Returns false and changes nothing
    /// when the pool is short.
    pub fn try_spend(&mut self, category: StatCategory, amount: u32) -> bool {
        let pool = match category {
            StatCategory::Physical => &mut self.physical,
            StatCategory::Mental => &mut self.mental,
        };
        if *pool < amount {
            return false;
        }
        *pool -= amount;
        true
    }
}
