//! Tunables read from `~/.hunter/config.toml`.
//!
//! Every field is optional in the file; anything missing keeps the built-in
//! value from `constants`.

use super::constants::*;
use crate::utils::persistence::hunter_dir;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub training_duration_seconds: u32,
    pub training_reward: u32,
    pub training_tick_ms: u64,
    pub training_clear_delay_ms: u64,
    pub notification_ttl_ms: u64,
    pub player_turn_delay_ms: u64,
    pub enemy_turn_delay_ms: u64,
    pub dungeon_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            training_duration_seconds: TRAINING_DURATION_SECONDS,
            training_reward: TRAINING_REWARD,
            training_tick_ms: TRAINING_TICK_MS,
            training_clear_delay_ms: TRAINING_CLEAR_DELAY_MS,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            player_turn_delay_ms: PLAYER_TURN_DELAY_MS,
            enemy_turn_delay_ms: ENEMY_TURN_DELAY_MS,
            dungeon_step_ms: DUNGEON_STEP_MS,
        }
    }
}

impl GameConfig {
    pub fn parse(text: &str) -> io::Result<Self> {
        toml::from_str(text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn default_path() -> io::Result<PathBuf> {
        Ok(hunter_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("no config directory: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
