#![allow(dead_code)]

//! Profile store — a single-record key-value contract (`load`/`save`/
//! `clear`), injected wherever persistence is needed so the engine stays a
//! pure function of its explicit inputs.
//!
//! Carried in `AppState` as `Arc<dyn ProfileStore>`. The trait is
//! synchronous: the contract is a local JSON record, not a database.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use crate::models::profile::UserProfile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The store contract. Implement this to swap persistence without touching
/// handlers or the engine.
pub trait ProfileStore: Send + Sync {
    fn load(&self) -> Result<Option<UserProfile>, StoreError>;
    fn save(&self, profile: &UserProfile) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// JSON-file-backed store. Writes go through a temp file and an atomic
/// rename; an internal lock serializes writers, last write wins.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let profile = serde_json::from_str(&raw)?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(profile)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Profile {} saved to {}", profile.id, self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Mutex<Option<UserProfile>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
