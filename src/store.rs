// src/store.rs

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;
use thiserror::Error;

use crate::history::{HistoryEntry, HistoryLog};

pub const HISTORY_KEY: &str = "omikuji-history";
pub const THEME_KEY: &str = "omikuji-theme";
pub const LANGUAGE_KEY: &str = "omikuji-language";

/// Storage key for the history of the given identity, or the anonymous
/// scope when signed out.
pub fn history_key(identity: Option<&str>) -> String {
    match identity {
        Some(login) => format!("{HISTORY_KEY}-{login}"),
        None => HISTORY_KEY.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Whole-value key/value storage. Each `put` fully overwrites the prior
/// value for its key.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// One file per key under the platform data directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open_default() -> Result<Self, StoreError> {
        let root = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no platform data directory".to_string()))?
            .join("omikuji");
        Self::open(root)
    }

    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store used in tests and as the fallback when no data
/// directory is available; everything kept here is session-only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Reads the persisted entries under `key`. Absent, unreadable, or
/// malformed values all load as an empty sequence; nothing here reaches
/// the caller as an error.
pub fn load_history(store: &dyn Store, key: &str) -> Vec<HistoryEntry> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("could not read history under {key}: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("discarding malformed history under {key}: {e}");
            Vec::new()
        }
    }
}

/// Serializes the log and overwrites the value under `key`. The caller is
/// expected to log a failure and carry on with its in-memory copy.
pub fn persist_history(store: &mut dyn Store, key: &str, log: &HistoryLog) -> Result<(), StoreError> {
    let raw = serde_json::to_string(log.entries())?;
    store.put(key, &raw)
}

pub fn load_pref(store: &dyn Store, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("could not read preference {key}: {e}");
            None
        }
    }
}

pub fn persist_pref(store: &mut dyn Store, key: &str, token: &str) -> Result<(), StoreError> {
    store.put(key, token)
}
