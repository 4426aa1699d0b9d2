//! Key-value persistence for the player record.
//!
//! Values are JSON strings. [`FileStore`] keeps one `<key>.json` file per
//! key under `~/.hunter/`; [`MemoryStore`] keeps them in a shared map for
//! tests and headless runs.

use crate::core::constants::{SAVE_DIR_NAME, SAVE_KEY};
use crate::core::game_state::PlayerState;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// Get the ~/.hunter/ directory path, creating it if needed.
pub fn hunter_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub trait KeyValueStore {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store rooted at `~/.hunter/`.
    pub fn in_home() -> io::Result<Self> {
        Self::new(hunter_dir()?)
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// while a `Game` owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves and loads the whole `PlayerState` under one key.
pub struct SaveStore {
    store: Box<dyn KeyValueStore>,
}

impl SaveStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn save(&mut self, state: &PlayerState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.store.set(SAVE_KEY, &json)?;
        debug!("saved player record ({} bytes)", json.len());
        Ok(())
    }

    /// Returns the saved record, or `None` when nothing was saved yet.
    pub fn try_load(&self) -> io::Result<Option<PlayerState>> {
        match self.store.get(SAVE_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            None => Ok(None),
        }
    }

    /// Returns the saved record, falling back to a fresh one when it is
    /// missing or unreadable.
    pub fn load(&self) -> PlayerState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => PlayerState::default(),
            Err(e) => {
                warn!("could not load save, starting fresh: {}", e);
                PlayerState::default()
            }
        }
    }
}
