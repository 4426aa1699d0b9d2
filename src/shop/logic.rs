use super::data::{item_catalog, quest_catalog};
use crate::core::constants::*;
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use crate::core::progression::{add_coins, remove_coins};
use crate::items::inventory::{add_item, remove_item};
use crate::items::types::{Item, Rank};
use crate::quests::logic::add_quest;
use crate::quests::types::Quest;
use log::info;
use uuid::Uuid;

/// Coins an item fetches when sold back: 70% of the price, floored.
pub fn resale_value(price: u64) -> u64 {
    (price as f64 * RESALE_FRACTION).floor() as u64
}

fn purchased_id(catalog_id: &str) -> String {
    format!("purchased-{}-{}", catalog_id, Uuid::new_v4())
}

/// Level gates: nothing below level 3, A-rank from 5, S-rank from 7.
pub fn check_purchase_allowed(state: &PlayerState, rank: Rank) -> Result<(), GameError> {
    if state.level < SHOP_MIN_LEVEL {
        return Err(GameError::ShopLocked);
    }
    let required = match rank {
        Rank::S => SHOP_S_RANK_MIN_LEVEL,
        Rank::A => SHOP_A_RANK_MIN_LEVEL,
        _ => return Ok(()),
    };
    if state.level < required {
        return Err(GameError::RankLocked { rank, required });
    }
    Ok(())
}

pub fn buy_quest(state: &mut PlayerState, catalog_id: &str) -> Result<Quest, GameError> {
    let offer = quest_catalog()
        .into_iter()
        .find(|q| q.quest.id == catalog_id)
        .ok_or(GameError::NotForSale)?;
    check_purchase_allowed(state, offer.quest.rank)?;
    remove_coins(state, offer.price)?;

    let mut quest = offer.quest;
    quest.id = purchased_id(catalog_id);
    add_quest(state, quest.clone());
    info!("bought quest '{}' for {} coins", quest.title, offer.price);
    Ok(quest)
}

/// Buys an item. The copy in the inventory is worth its resale value.
pub fn buy_item(state: &mut PlayerState, catalog_id: &str) -> Result<Item, GameError> {
    let mut item = item_catalog()
        .into_iter()
        .find(|i| i.id == catalog_id)
        .ok_or(GameError::NotForSale)?;
    check_purchase_allowed(state, item.rank)?;
    let price = item.value;
    remove_coins(state, price)?;

    item.id = purchased_id(catalog_id);
    item.value = resale_value(price);
    add_item(state, item.clone());
    info!("bought '{}' for {} coins", item.name, price);
    Ok(item)
}

/// Sells an inventory item for its value, unequipping it first.
pub fn sell_item(state: &mut PlayerState, item_id: &str) -> Result<Item, GameError> {
    let item = remove_item(state, item_id)?;
    add_coins(state, item.value);
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::inventory::equip_item;

    fn player_at(level: u32, coins: u64) -> PlayerState {
        let mut state = PlayerState::new(0);
        state.level = level;
        state.coins = coins;
        state
    }

    #[test]
    fn test_resale_value_floors() {
        assert_eq!(resale_value(50), 35);
        assert_eq!(resale_value(50000), 35000);
        assert_eq!(resale_value(1), 0);
    }

    #[test]
    fn test_level_gates() {
        assert_eq!(
            check_purchase_allowed(&player_at(2, 0), Rank::E),
            Err(GameError::ShopLocked)
        );
        assert_eq!(check_purchase_allowed(&player_at(3, 0), Rank::B), Ok(()));
        assert_eq!(
            check_purchase_allowed(&player_at(4, 0), Rank::A),
            Err(GameError::RankLocked {
                rank: Rank::A,
                required: 5
            })
        );
        assert_eq!(
            check_purchase_allowed(&player_at(6, 0), Rank::S),
            Err(GameError::RankLocked {
                rank: Rank::S,
                required: 7
            })
        );
        assert_eq!(check_purchase_allowed(&player_at(7, 0), Rank::S), Ok(()));
    }

    #[test]
    fn test_buy_quest() {
        let mut state = player_at(3, 1000);
        let quest = buy_quest(&mut state, "shop-quest-2").unwrap();

        assert_eq!(state.coins, 700);
        assert!(quest.id.starts_with("purchased-shop-quest-2-"));
        assert_eq!(state.quests.last(), Some(&quest));
        assert_eq!(quest.rewards.exp, 75);
    }

    #[test]
    fn test_purchased_ids_are_unique() {
        let mut state = player_at(3, 1000);
        let a = buy_quest(&mut state, "shop-quest-1").unwrap();
        let b = buy_quest(&mut state, "shop-quest-1").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_buy_without_coins_changes_nothing() {
        let mut state = player_at(3, 100);
        let before = state.clone();
        assert_eq!(
            buy_quest(&mut state, "shop-quest-3"),
            Err(GameError::NotEnoughCoins { needed: 2700 })
        );
        assert_eq!(state, before);
        assert_eq!(buy_item(&mut state, "nope"), Err(GameError::NotForSale));
    }

    #[test]
    fn test_buy_equip_and_sell_gauntlet() {
        let mut state = player_at(7, 60000);
        let gauntlet = buy_item(&mut state, "shop-item-2").unwrap();
        assert_eq!(state.coins, 10000);
        assert_eq!(gauntlet.value, 35000);

        equip_item(&mut state, &gauntlet.id).unwrap();
        let sold = sell_item(&mut state, &gauntlet.id).unwrap();
        assert!(!sold.is_equipped);
        assert_eq!(state.coins, 45000);
        assert!(state.inventory.is_empty());
        assert!(state.equipment.iter_equipped().next().is_none());
    }
}
