use super::types::Quest;
use crate::items::types::Rank;

pub fn starting_quests() -> Vec<Quest> {
    vec![Quest::new("quest-1", "Courage of the Weak", Rank::E, 50, 100)
        .with_text("Become a Player and start your journey.", "Become a Player")]
}

/// The three daily quests, with ids stamped by the reset time so every
/// batch is distinct.
pub fn daily_quests(reset_at_ms: i64) -> Vec<Quest> {
    vec![
        Quest::new(
            &format!("daily-{}-1", reset_at_ms),
            "Daily Training",
            Rank::E,
            20,
            50,
        )
        .with_text(
            "Complete a training session to improve your stats.",
            "Train any stat once",
        ),
        Quest::new(
            &format!("daily-{}-2", reset_at_ms),
            "Equipment Inspection",
            Rank::E,
            15,
            30,
        )
        .with_text(
            "Equip or unequip an item to check your gear.",
            "Equip or unequip one item",
        ),
        Quest::new(
            &format!("daily-{}-3", reset_at_ms),
            "Resource Gathering",
            Rank::E,
            30,
            70,
        )
        .with_text(
            "Gather resources by completing a quest.",
            "Complete any quest",
        ),
    ]
}
