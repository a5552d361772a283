/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Token persistence for the Zencare client
//!
//! The access token returned by login must survive between requests. This
//! module abstracts where it lives behind the small [`TokenStore`] trait so
//! the client stays storage-backend-agnostic: production code can use the
//! file-backed store, tests an in-memory fake.

use crate::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Key/value store used to persist session tokens between requests
pub trait TokenStore: Send + Sync {
    /// Returns the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile token store backed by a `HashMap`
///
/// Nothing survives the process; intended for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StorageError(String::from("token store lock poisoned")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Token store persisted as a small JSON object on disk
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store that reads and writes the given file
    ///
    /// The file is created on the first `set`; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> HashMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring unreadable token file {}: {}", self.path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        let contents = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, contents)?;
        debug!("Persisted {} to {}", key, self.path.display());
        Ok(())
    }
}
