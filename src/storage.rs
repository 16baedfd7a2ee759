//! File-backed key-value store for the CLI.
//!
//! All entries live in one JSON object. The file is re-read on every access,
//! so separate `sentinel` processes sharing a state file see each other's
//! writes; the last writer wins.

use parking_lot::Mutex;
use sentinel_session::{KeyValueStore, Result, SessionError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> SessionError {
        SessionError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| self.storage_error("read", e))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| self.storage_error("parse", e))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.storage_error("create directory for", e))?;
        }
        let contents =
            serde_json::to_string_pretty(entries).map_err(|e| self.storage_error("encode", e))?;
        fs::write(&self.path, contents).map_err(|e| self.storage_error("write", e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
