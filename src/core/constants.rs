// Starting character
pub const STARTING_NAME: &str = "SUNG JIN-WOO";
pub const STARTING_LEVEL: u32 = 2;
pub const STARTING_HP: u32 = 160;
pub const STARTING_IP: u32 = 10;
pub const STARTING_EXP_TO_NEXT_LEVEL: u64 = 66;
pub const STARTING_COINS: u64 = 1000;
pub const STARTING_PHYSICAL_POINTS: u32 = 6;
pub const STARTING_MENTAL_POINTS: u32 = 1;

// Resource formulas: max_hp = BASE_HP + VIT * HP_PER_VIT, max_ip = BASE_IP + INT * IP_PER_INT
pub const BASE_HP: u32 = 100;
pub const HP_PER_VIT: u32 = 20;
pub const BASE_IP: u32 = 5;
pub const IP_PER_INT: u32 = 5;

// Leveling
pub const EXP_THRESHOLD_GROWTH: f64 = 1.5;
pub const LEVEL_UP_PHYSICAL_POINTS: u32 = 3;
pub const LEVEL_UP_MENTAL_POINTS: u32 = 1;
pub const SKILL_POINT_LEVEL_INTERVAL: u32 = 3;

// Player combat
pub const ATTACK_PER_STR: u32 = 5;
pub const ATTACK_PER_AGI: u32 = 2;
pub const DEFENSE_PER_VIT: u32 = 3;
pub const CRIT_CHANCE_PER_PER: f64 = 0.01;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const ENEMY_DEFENSE_FACTOR: f64 = 0.5;

// Skill attacks
pub const SKILL_CRIT_CHANCE_PER_PER: f64 = 0.015;
pub const SKILL_CRIT_MULTIPLIER: f64 = 1.8;
pub const SKILL_ENEMY_DEFENSE_FACTOR: f64 = 0.3;
pub const DEFAULT_SKILL_ATTACK_PERCENT: f64 = 100.0;

// Enemy attacks
pub const PLAYER_DEFENSE_FACTOR: f64 = 0.5;

// Potions and fleeing
pub const POTION_HEAL_FRACTION: f64 = 0.3;
pub const FLEE_BASE_CHANCE: f64 = 0.3;
pub const FLEE_CHANCE_PER_AGI: f64 = 0.02;

// Turn pacing (milliseconds)
pub const PLAYER_TURN_DELAY_MS: u64 = 1500;
pub const ENEMY_TURN_DELAY_MS: u64 = 1200;

// Training
pub const TRAINING_DURATION_SECONDS: u32 = 10;
pub const TRAINING_REWARD: u32 = 20;
pub const TRAINING_TICK_MS: u64 = 1000;
pub const TRAINING_CLEAR_DELAY_MS: u64 = 3000;

// Notifications
pub const NOTIFICATION_TTL_MS: u64 = 5000;

// Dungeon exploration
pub const DUNGEON_STEP_MS: u64 = 200;
pub const DUNGEON_PROGRESS_PER_STEP: u32 = 5;
pub const DUNGEON_ENCOUNTER_POINTS: [u32; 3] = [30, 65, 85];
pub const DUNGEON_MONSTER_CHANCE: f64 = 0.6;
pub const DUNGEON_TREASURE_CHANCE: f64 = 0.8;
pub const DUNGEON_TREASURE_COINS_MIN: u64 = 100;
pub const DUNGEON_TREASURE_COINS_MAX: u64 = 299;
pub const DUNGEON_MONSTER_COINS_MIN: u64 = 25;
pub const DUNGEON_MONSTER_COINS_MAX: u64 = 74;
pub const DUNGEON_BASE_COINS: u64 = 100;
pub const DUNGEON_BASE_EXP: u64 = 50;

// Shop
pub const SHOP_MIN_LEVEL: u32 = 3;
pub const SHOP_A_RANK_MIN_LEVEL: u32 = 5;
pub const SHOP_S_RANK_MIN_LEVEL: u32 = 7;
pub const RESALE_FRACTION: f64 = 0.7;

// Daily quests
pub const DAILY_RESET_INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;

// Save system
pub const SAVE_KEY: &str = "player";
pub const SAVE_DIR_NAME: &str = ".hunter";
pub const CONFIG_FILE_NAME: &str = "config.toml";
