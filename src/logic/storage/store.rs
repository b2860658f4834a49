//! Document Stores
//!
//! Whole-document load/save keyed by logical name.
//! No locking: read-modify-write across processes is last-writer-wins.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::Value;

use super::error::{validate_name, StoreError};

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Key-value interface over JSON documents.
///
/// `load` returns `Ok(None)` for a missing document and `Err` for one that
/// exists but cannot be read or parsed.
pub trait DocumentStore {
    fn load(&self, name: &str) -> Result<Option<Value>, StoreError>;

    fn save(&self, name: &str, value: &Value) -> Result<(), StoreError>;
}

// ============================================================================
// JSON FILES
// ============================================================================

/// One pretty-printed JSON file per document under a fixed directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a document on disk
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.base_dir.join(name))
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, name: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read(&path)?;
        let value = serde_json::from_slice(&data)?;
        Ok(Some(value))
    }

    fn save(&self, name: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.base_dir)?;

        // Write next to the target, then swap in
        let json = serde_json::to_vec_pretty(value)?;
        let tmp = self.base_dir.join(format!("{}.tmp", name));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        log::debug!("Wrote document {:?}", path);
        Ok(())
    }
}

// ============================================================================
// IN-MEMORY
// ============================================================================

/// Process-local store holding serialized text, used by tests and embedders
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text under a name, valid JSON or not
    pub fn insert_raw(&self, name: &str, text: &str) {
        self.docs.lock().insert(name.to_string(), text.to_string());
    }

    pub fn raw(&self, name: &str) -> Option<String> {
        self.docs.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.docs.lock().contains_key(name)
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Option<Value>, StoreError> {
        validate_name(name)?;
        match self.docs.lock().get(name) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, name: &str, value: &Value) -> Result<(), StoreError> {
        validate_name(name)?;
        let text = serde_json::to_string_pretty(value)?;
        self.docs.lock().insert(name.to_string(), text);
        Ok(())
    }
}
