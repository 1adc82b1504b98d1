//! In-memory key-value store.
//!
//! Used by tests and by ephemeral sessions that should not leave state on
//! disk. Contents vanish when the store is dropped.

use std::collections::HashMap;
use std::sync::Mutex;
use yumdeck_core::error::{DeckError, Result};
use yumdeck_core::storage::KeyValueStore;

/// A HashMap-backed key-value store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| DeckError::internal("memory store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| DeckError::internal("memory store mutex poisoned"))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryKeyValueStore::new();
        store.put("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"v".to_vec());
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryKeyValueStore::new();
        store.put("k", b"first").unwrap();
        store.put("k", b"second").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"second".to_vec());
    }
}
