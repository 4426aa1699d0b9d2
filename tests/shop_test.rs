//! Integration test: Buying and selling at the shop

use hunter::character::attributes::Stat;
use hunter::core::config::GameConfig;
use hunter::core::error::GameError;
use hunter::core::game::Game;
use hunter::items::types::Rank;
use hunter::utils::persistence::{MemoryStore, SaveStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game_at_level(level: u32, coins: u64) -> Game {
    let mut game = Game::new(
        SaveStore::new(MemoryStore::new()),
        GameConfig::default(),
        StdRng::seed_from_u64(8),
        0,
    );
    // 66, 99, 148, 222, 333 ...
    let mut needed = 0;
    let mut threshold = 66u64;
    for _ in 2..level {
        needed += threshold;
        threshold = (threshold as f64 * 1.5).floor() as u64;
    }
    game.gain_experience(needed).unwrap();
    let current = game.state().coins;
    if coins > current {
        game.add_coins(coins - current).unwrap();
    } else {
        game.remove_coins(current - coins).unwrap();
    }
    assert_eq!(game.state().level, level);
    game
}

#[test]
fn test_shop_locked_below_level_three() {
    let mut game = game_at_level(2, 1000);
    assert_eq!(game.buy_quest("shop-quest-1"), Err(GameError::ShopLocked));
    assert_eq!(game.buy_item("shop-item-1"), Err(GameError::ShopLocked));
    assert_eq!(game.state().coins, 1000);
}

#[test]
fn test_bought_quest_can_be_completed() {
    let mut game = game_at_level(3, 1000);
    let quest = game.buy_quest("shop-quest-2").unwrap();
    assert_eq!(game.state().coins, 700);
    assert!(!quest.is_completed);

    let done = game.complete_quest(&quest.id).unwrap();
    assert_eq!(done.rewards.exp, 75);
    assert_eq!(game.state().coins, 850);
}

#[test]
fn test_rank_gates() {
    let mut game = game_at_level(4, 200_000);
    assert_eq!(
        game.buy_quest("shop-quest-5"),
        Err(GameError::RankLocked {
            rank: Rank::A,
            required: 5
        })
    );
    assert_eq!(
        game.buy_item("shop-item-2"),
        Err(GameError::RankLocked {
            rank: Rank::S,
            required: 7
        })
    );
    assert_eq!(game.buy_quest("shop-quest-9"), Err(GameError::NotForSale));
    assert_eq!(game.state().coins, 200_000);
}

#[test]
fn test_gauntlet_buy_equip_sell() {
    let mut game = game_at_level(7, 50_000);
    let gauntlet = game.buy_item("shop-item-2").unwrap();
    assert_eq!(game.state().coins, 0);
    assert_eq!(gauntlet.value, 35_000);

    game.equip_item(&gauntlet.id).unwrap();
    assert_eq!(game.derived_stats().stats.get(Stat::Agi), 20);

    let sold = game.sell_item(&gauntlet.id).unwrap();
    assert_eq!(sold.value, 35_000);
    assert_eq!(game.state().coins, 35_000);
    assert!(game.state().equipment.gauntlet.is_none());
    assert_eq!(game.derived_stats().stats.get(Stat::Agi), 0);
    assert_eq!(
        game.notifications().latest().map(|n| n.message.as_str()),
        Some("Sold Gauntlet of Lightning for 35000 coins!")
    );
}

#[test]
fn test_not_enough_coins() {
    let mut game = game_at_level(3, 99);
    assert_eq!(
        game.buy_quest("shop-quest-1"),
        Err(GameError::NotEnoughCoins { needed: 100 })
    );
    assert_eq!(game.state().quests.len(), 1);
}
