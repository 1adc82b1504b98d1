//! Identifier-list persistence adapter.
//!
//! Identifier lists are stored as JSON arrays of strings. Loads are
//! best-effort: an absent key, an unreadable store, or corrupt bytes all
//! degrade to the empty list so a fresh session can start. Saves overwrite
//! the full list; there are no incremental writes.

use super::KeyValueStore;
use crate::error::Result;

/// Loads the identifier list stored at `key`.
///
/// Never fails: missing data and corruption are treated as "no data" and
/// logged at warn level, per the best-effort storage contract.
pub fn load_identifier_list(store: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!("failed to read '{}', treating as empty: {}", key, err);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<String>>(&bytes) {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!("corrupt identifier list at '{}', resetting to empty: {}", key, err);
            Vec::new()
        }
    }
}

/// Saves the full identifier list at `key`, overwriting prior contents.
pub fn save_identifier_list(store: &dyn KeyValueStore, key: &str, ids: &[String]) -> Result<()> {
    let bytes = serde_json::to_vec(ids)?;
    store.put(key, &bytes)
}
