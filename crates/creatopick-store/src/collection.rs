//! Named JSON array collections with full-replace write semantics

use crate::io::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt collection at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One persisted collection: a JSON array in a single file, replaced
/// wholesale on every write.
pub struct Collection<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all records; a missing file is an empty collection
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the whole collection
    pub fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), count = items.len(), "collection saved");
        Ok(())
    }

    /// Read-modify-write append; returns the new record count
    pub fn append(&self, item: T) -> Result<usize, StoreError> {
        let mut items = self.load()?;
        items.push(item);
        self.save(&items)?;
        Ok(items.len())
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.len())
    }
}
