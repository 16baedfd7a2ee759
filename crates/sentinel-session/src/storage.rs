//! Persistent string storage abstraction.
//!
//! The browser's `localStorage`, a JSON file on disk and a plain in-memory
//! map all satisfy [`KeyValueStore`]. The token store only ever talks to this
//! trait, so tests can substitute [`MemoryStore`].

use crate::error::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// A per-origin key-value store holding string entries.
pub trait KeyValueStore: Send + Sync {
    /// Returns the entry for `key`, or `None` if it has never been set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store. Contents vanish when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
