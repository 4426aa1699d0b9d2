//! Inventory and equipment operations on the player record.
//!
//! The inventory owns every item; `Equipment` only records which item id
//! sits in which slot. Every mutation below keeps the two in step: an id in a
//! slot always names an inventory item whose `is_equipped` flag is set, and a
//! flagged item always sits in exactly one slot.

use super::types::{EquipmentSlot, Item};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;

/// Result of a successful equip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipOutcome {
    pub slot: EquipmentSlot,
    /// Item that previously occupied the slot and was unequipped.
    pub replaced: Option<String>,
}

/// Adds an item to the inventory, always unequipped.
pub fn add_item(state: &mut PlayerState, mut item: Item) {
    item.is_equipped = false;
    state.inventory.push(item);
}

fn set_equipped_flag(state: &mut PlayerState, item_id: &str, equipped: bool) {
    if let Some(item) = state.inventory.iter_mut().find(|i| i.id == item_id) {
        item.is_equipped = equipped;
    }
}

/// Equips an inventory item into the slot named by its category, first
/// unequipping whatever occupied that slot.
pub fn equip_item(state: &mut PlayerState, item_id: &str) -> Result<EquipOutcome, GameError> {
    let item = state.find_item(item_id).ok_or(GameError::ItemNotFound)?;
    let slot = item.slot().ok_or_else(|| GameError::NotEquippable {
        name: item.name.clone(),
    })?;
    if item.is_equipped {
        return Err(GameError::AlreadyEquipped {
            name: item.name.clone(),
        });
    }

    let replaced = state.equipment.get(slot).map(str::to_string);
    if let Some(previous) = &replaced {
        set_equipped_flag(state, previous, false);
    }

    set_equipped_flag(state, item_id, true);
    state.equipment.set(slot, Some(item_id.to_string()));

    Ok(EquipOutcome { slot, replaced })
}

/// Clears the slot holding `item_id`.
pub fn unequip_item(state: &mut PlayerState, item_id: &str) -> Result<EquipmentSlot, GameError> {
    let slot = state
        .equipment
        .slot_of(item_id)
        .ok_or(GameError::NotEquipped)?;
    set_equipped_flag(state, item_id, false);
    state.equipment.set(slot, None);
    Ok(slot)
}

/// Removes an item from the inventory, unequipping it first when needed.
/// Crediting its value is left to the caller.
pub fn remove_item(state: &mut PlayerState, item_id: &str) -> Result<Item, GameError> {
    let index = state
        .inventory
        .iter()
        .position(|item| item.id == item_id)
        .ok_or(GameError::ItemNotFound)?;

    if let Some(slot) = state.equipment.slot_of(item_id) {
        state.equipment.set(slot, None);
    }

    let mut item = state.inventory.remove(index);
    item.is_equipped = false;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rank;

    fn sword(id: &str) -> Item {
        Item::new(id, "Sword", "WEAPON", Rank::E, 100)
    }

    #[test]
    fn test_add_item_clears_flag() {
        let mut state = PlayerState::new(0);
        let mut item = sword("a");
        item.is_equipped = true;
        add_item(&mut state, item);
        assert!(!state.inventory[0].is_equipped);
    }

    #[test]
    fn test_equip_and_unequip() {
        let mut state = PlayerState::new(0);
        add_item(&mut state, sword("a"));

        let outcome = equip_item(&mut state, "a").unwrap();
        assert_eq!(outcome.slot, EquipmentSlot::Weapon);
        assert_eq!(outcome.replaced, None);
        assert!(state.find_item("a").unwrap().is_equipped);

        assert_eq!(unequip_item(&mut state, "a"), Ok(EquipmentSlot::Weapon));
        assert!(!state.find_item("a").unwrap().is_equipped);
        assert_eq!(state.equipment.get(EquipmentSlot::Weapon), None);
    }

    #[test]
    fn test_equip_replaces_occupant() {
        let mut state = PlayerState::new(0);
        add_item(&mut state, sword("a"));
        add_item(&mut state, sword("b"));

        equip_item(&mut state, "a").unwrap();
        let outcome = equip_item(&mut state, "b").unwrap();

        assert_eq!(outcome.replaced.as_deref(), Some("a"));
        assert!(!state.find_item("a").unwrap().is_equipped);
        assert!(state.find_item("b").unwrap().is_equipped);
        assert_eq!(state.equipment.get(EquipmentSlot::Weapon), Some("b"));
        assert_eq!(state.inventory.len(), 2);
    }

    #[test]
    fn test_equip_twice_rejected() {
        let mut state = PlayerState::new(0);
        add_item(&mut state, sword("a"));
        equip_item(&mut state, "a").unwrap();
        assert!(matches!(
            equip_item(&mut state, "a"),
            Err(GameError::AlreadyEquipped { .. })
        ));
    }

    #[test]
    fn test_equip_consumable_rejected() {
        let mut state = PlayerState::new(0);
        add_item(
            &mut state,
            Item::new("p", "Potion", "CONSUMABLE", Rank::E, 35),
        );
        let before = state.clone();
        assert!(matches!(
            equip_item(&mut state, "p"),
            Err(GameError::NotEquippable { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_equip_missing_item() {
        let mut state = PlayerState::new(0);
        assert_eq!(equip_item(&mut state, "nope"), Err(GameError::ItemNotFound));
    }

    #[test]
    fn test_unequip_not_equipped() {
        let mut state = PlayerState::new(0);
        add_item(&mut state, sword("a"));
        assert_eq!(unequip_item(&mut state, "a"), Err(GameError::NotEquipped));
    }

    #[test]
    fn test_remove_equipped_item_clears_slot() {
        let mut state = PlayerState::new(0);
        add_item(&mut state, sword("a"));
        equip_item(&mut state, "a").unwrap();

        let removed = remove_item(&mut state, "a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(state.inventory.is_empty());
        assert_eq!(state.equipment.get(EquipmentSlot::Weapon), None);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut state = PlayerState::new(0);
        assert_eq!(remove_item(&mut state, "x"), Err(GameError::ItemNotFound));
    }
}
