use crate::character::attributes::Stat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Difficulty/quality tier shared by items, quests and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S = 5,
}

impl Rank {
    pub fn all() -> [Rank; 6] {
        [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }

    /// Reward multiplier for dungeon runs: doubles per tier starting at 1.
    pub fn reward_multiplier(&self) -> u64 {
        1 << (*self as u64)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Gauntlet,
    Boots,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 6] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Helmet,
            EquipmentSlot::Gauntlet,
            EquipmentSlot::Boots,
            EquipmentSlot::Accessory,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Helmet => "helmet",
            EquipmentSlot::Gauntlet => "gauntlet",
            EquipmentSlot::Boots => "boots",
            EquipmentSlot::Accessory => "accessory",
        }
    }

    /// Maps an item category to its slot. The category is lower-cased first,
    /// so "GAUNTLET" and "gauntlet" land in the same slot. Categories such as
    /// "CONSUMABLE" have no slot.
    pub fn from_category(category: &str) -> Option<EquipmentSlot> {
        let key = category.to_lowercase();
        EquipmentSlot::all().into_iter().find(|slot| slot.key() == key)
    }
}

/// Per-stat adjustments carried by an item. Buffs and debuffs are both
/// stored as positive magnitudes.
pub type StatBonuses = BTreeMap<Stat, u32>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub rank: Rank,
    pub value: u64,
    #[serde(default)]
    pub buffs: StatBonuses,
    #[serde(default)]
    pub debuffs: StatBonuses,
    #[serde(default)]
    pub is_equipped: bool,
}

impl Item {
    pub fn new(id: &str, name: &str, category: &str, rank: Rank, value: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            rank,
            value,
            buffs: StatBonuses::new(),
            debuffs: StatBonuses::new(),
            is_equipped: false,
        }
    }

    pub fn with_buff(mut self, stat: Stat, amount: u32) -> Self {
        self.buffs.insert(stat, amount);
        self
    }

    pub fn with_debuff(mut self, stat: Stat, amount: u32) -> Self {
        self.debuffs.insert(stat, amount);
        self
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        EquipmentSlot::from_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::E < Rank::D);
        assert!(Rank::D < Rank::C);
        assert!(Rank::C < Rank::B);
        assert!(Rank::B < Rank::A);
        assert!(Rank::A < Rank::S);
    }

    #[test]
    fn test_rank_reward_multiplier() {
        let multipliers: Vec<u64> = Rank::all().iter().map(|r| r.reward_multiplier()).collect();
        assert_eq!(multipliers, vec![1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_slot_from_category_is_case_insensitive() {
        assert_eq!(
            EquipmentSlot::from_category("GAUNTLET"),
            Some(EquipmentSlot::Gauntlet)
        );
        assert_eq!(
            EquipmentSlot::from_category("Weapon"),
            Some(EquipmentSlot::Weapon)
        );
        assert_eq!(EquipmentSlot::from_category("CONSUMABLE"), None);
    }

    #[test]
    fn test_item_builders() {
        let item = Item::new("g1", "Gauntlet", "GAUNTLET", Rank::S, 35000)
            .with_buff(Stat::Agi, 20)
            .with_debuff(Stat::Vit, 2);
        assert_eq!(item.buffs.get(&Stat::Agi), Some(&20));
        assert_eq!(item.debuffs.get(&Stat::Vit), Some(&2));
        assert!(!item.is_equipped);
        assert_eq!(item.slot(), Some(EquipmentSlot::Gauntlet));
    }
}
