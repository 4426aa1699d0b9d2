//! Shop catalog.

use crate::character::attributes::Stat;
use crate::items::types::{Item, Rank};
use crate::quests::types::Quest;

/// A quest offered for sale. Buying hands the player a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopQuest {
    pub quest: Quest,
    pub price: u64,
}

/// (id, title, description, objective, rank, price, exp, coins)
const QUESTS_FOR_SALE: [(&str, &str, &str, &str, Rank, u64, u64, u64); 6] = [
    (
        "shop-quest-1",
        "E-Rank Type Quest",
        "A simple quest suitable for novice hunters.",
        "Complete a basic training routine",
        Rank::E,
        100,
        25,
        50,
    ),
    (
        "shop-quest-2",
        "D-Rank Type Quest",
        "A moderate challenge for beginners.",
        "Defeat 3 monsters",
        Rank::D,
        300,
        75,
        150,
    ),
    (
        "shop-quest-3",
        "C-Rank Type Quest",
        "A challenging quest for intermediate hunters.",
        "Recover a stolen artifact",
        Rank::C,
        2700,
        200,
        500,
    ),
    (
        "shop-quest-4",
        "B-Rank Type Quest",
        "A difficult quest for experienced hunters.",
        "Clear the ancient dungeon",
        Rank::B,
        75000,
        800,
        2000,
    ),
    (
        "shop-quest-5",
        "A-Rank Type Quest",
        "A very dangerous mission for elite hunters only.",
        "Defeat the demon lord",
        Rank::A,
        100000,
        2000,
        5000,
    ),
    (
        "shop-quest-6",
        "S-Rank Type Quest",
        "The most challenging quest. Only for the strongest hunters.",
        "Save the world from destruction",
        Rank::S,
        200000,
        5000,
        20000,
    ),
];

pub fn quest_catalog() -> Vec<ShopQuest> {
    QUESTS_FOR_SALE
        .iter()
        .map(
            |&(id, title, description, objective, rank, price, exp, coins)| ShopQuest {
                quest: Quest::new(id, title, rank, exp, coins).with_text(description, objective),
                price,
            },
        )
        .collect()
}

/// Items for sale. An item's `value` is its price.
pub fn item_catalog() -> Vec<Item> {
    let mut potion = Item::new("shop-item-1", "Basic Health Potion", "CONSUMABLE", Rank::E, 50);
    potion.description = "Restores 50 HP instantly.".to_string();

    let mut gauntlet = Item::new("shop-item-2", "Gauntlet of Lightning", "GAUNTLET", Rank::S, 50000)
        .with_buff(Stat::Agi, 20);
    gauntlet.description =
        "A Red Gauntlet with Yellow Lines. Said to be worn by The Fastest Man Alive...".to_string();

    let mut elixir = Item::new("shop-item-3", "Elixir of Intelligence", "CONSUMABLE", Rank::A, 10000);
    elixir.description = "Permanently increases intelligence by 5 points.".to_string();

    vec![potion, gauntlet, elixir]
}
