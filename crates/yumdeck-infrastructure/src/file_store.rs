//! File-backed key-value store.
//!
//! Persists each key as its own file under a root directory. This is the
//! durable stand-in for origin-scoped browser storage: best-effort, and the
//! user (or the platform) may clear it at any time.

use std::fs;
use std::path::PathBuf;
use yumdeck_core::error::{DeckError, Result};
use yumdeck_core::storage::KeyValueStore;

use crate::paths::YumdeckPaths;

/// A key-value store writing one file per key.
///
/// Keys are fixed constants (see `yumdeck_core::storage::keys`), so they are
/// used as file stems directly. The root directory is created lazily on the
/// first write.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let root = YumdeckPaths::data_dir().map_err(|e| DeckError::storage(e.to_string()))?;
        Ok(Self::new(root))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read(&path)
            .map(Some)
            .map_err(|e| DeckError::io(format!("failed to read {:?}: {}", path, e)))
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                DeckError::io(format!("failed to create store dir {:?}: {}", self.root, e))
            })?;
        }
        let path = self.path_for(key);
        fs::write(&path, bytes)
            .map_err(|e| DeckError::io(format!("failed to write {:?}: {}", path, e)))?;
        tracing::debug!(key, bytes = bytes.len(), "value written");
        Ok(())
    }
}
