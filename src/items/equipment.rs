use super::types::EquipmentSlot;
use serde::{Deserialize, Serialize};

/// Slot map from equipment slot to the id of the item occupying it.
///
/// Holding ids rather than item copies keeps the inventory the single owner
/// of item data; the `is_equipped` flag on the item and the slot entry are
/// kept in step by the inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub helmet: Option<String>,
    pub gauntlet: Option<String>,
    pub boots: Option<String>,
    pub accessory: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_deref(),
            EquipmentSlot::Armor => self.armor.as_deref(),
            EquipmentSlot::Helmet => self.helmet.as_deref(),
            EquipmentSlot::Gauntlet => self.gauntlet.as_deref(),
            EquipmentSlot::Boots => self.boots.as_deref(),
            EquipmentSlot::Accessory => self.accessory.as_deref(),
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item_id: Option<String>) {
        let entry = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Gauntlet => &mut self.gauntlet,
            EquipmentSlot::Boots => &mut self.boots,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        *entry = item_id;
    }

    /// Finds the slot currently holding `item_id`.
    pub fn slot_of(&self, item_id: &str) -> Option<EquipmentSlot> {
        EquipmentSlot::all()
            .into_iter()
            .find(|slot| self.get(*slot) == Some(item_id))
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> {
        EquipmentSlot::all()
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|id| (slot, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert!(eq.accessory.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
    }

    #[test]
    fn test_equipment_get_set() {
        let mut eq = Equipment::new();
        eq.set(EquipmentSlot::Weapon, Some("sword".to_string()));
        assert_eq!(eq.get(EquipmentSlot::Weapon), Some("sword"));
        assert_eq!(eq.slot_of("sword"), Some(EquipmentSlot::Weapon));
        assert_eq!(eq.slot_of("axe"), None);
    }

    #[test]
    fn test_iter_equipped() {
        let mut eq = Equipment::new();
        eq.set(EquipmentSlot::Weapon, Some("a".to_string()));
        eq.set(EquipmentSlot::Boots, Some("b".to_string()));

        let equipped: Vec<_> = eq.iter_equipped().collect();
        assert_eq!(
            equipped,
            vec![(EquipmentSlot::Weapon, "a"), (EquipmentSlot::Boots, "b")]
        );
    }
}
