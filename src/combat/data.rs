use super::types::Enemy;
use crate::items::types::Rank;

/// (id, name, level, rank, hp, attack, defense, exp, coins)
const ROSTER: [(&str, &str, u32, Rank, u32, u32, u32, u64, u64); 4] = [
    ("goblin", "Lowly Goblin", 1, Rank::E, 100, 10, 5, 30, 50),
    ("wolf", "Wild Wolf", 3, Rank::D, 180, 15, 7, 60, 100),
    ("orc", "Orc Warrior", 5, Rank::C, 300, 25, 15, 120, 200),
    ("shadow-knight", "Shadow Knight", 10, Rank::B, 500, 40, 30, 250, 400),
];

pub fn enemy_roster() -> Vec<Enemy> {
    ROSTER
        .iter()
        .map(
            |&(id, name, level, rank, hp, attack, defense, exp, coins)| Enemy {
                id: id.to_string(),
                name: name.to_string(),
                level,
                rank,
                max_hp: hp,
                current_hp: hp,
                attack,
                defense,
                reward_exp: exp,
                reward_coins: coins,
            },
        )
        .collect()
}

pub fn find_enemy(enemy_id: &str) -> Option<Enemy> {
    enemy_roster().into_iter().find(|e| e.id == enemy_id)
}

/// Enemies far above the player (level more than 1.5× theirs) are flagged
/// as dangerous.
pub fn is_dangerous(enemy: &Enemy, player_level: u32) -> bool {
    enemy.level as f64 > player_level as f64 * 1.5
}
