//! Key-value persistence primitives.
//!
//! The deck engine persists its identifier lists through the `KeyValueStore`
//! capability defined here. Concrete stores live in the infrastructure
//! crate; the core never touches the file system directly.

pub mod identifier_list;
pub mod keys;

pub use identifier_list::{load_identifier_list, save_identifier_list};

use crate::error::Result;

/// An abstract synchronous key-value byte store.
///
/// This trait defines the contract for persisting raw values under fixed
/// string keys, decoupling the deck engine from the specific storage
/// mechanism (files, memory, browser storage behind a bridge).
///
/// # Implementation Notes
///
/// The store is best-effort: values may be evicted or cleared externally at
/// any time, and callers must tolerate absent data. Access is single-writer;
/// concurrent writers race with last-writer-wins semantics on the underlying
/// medium.
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw bytes stored at `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(bytes))`: A value is present.
    /// - `Ok(None)`: No value stored under this key.
    /// - `Err(_)`: The store could not be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `bytes` at `key`, overwriting any previous value.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_store {
    use super::KeyValueStore;
    use crate::error::{DeckError, Result};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// HashMap-backed store used by the core unit tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store pre-seeded with a single entry.
        pub fn with_entry(key: &str, bytes: &[u8]) -> Self {
            let store = Self::new();
            store
                .entries
                .lock()
                .unwrap()
                .insert(key.to_string(), bytes.to_vec());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
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

    /// Store whose writes always fail, for error-path tests.
    #[derive(Debug, Default)]
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(DeckError::storage("store unavailable"))
        }

        fn put(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
            Err(DeckError::storage("store unavailable"))
        }
    }
}
