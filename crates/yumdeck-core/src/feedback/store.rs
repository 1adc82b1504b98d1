//! Feedback record persistence over the shared key-value store.
//!
//! Same best-effort contract as the identifier lists: absent or corrupt
//! data degrades to the default record and is never surfaced to the user.

use super::model::FeedbackRecord;
use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::storage::keys::FEEDBACK_KEY;

/// Loads the feedback record, falling back to the default when absent or
/// corrupt.
pub fn load_feedback(store: &dyn KeyValueStore) -> FeedbackRecord {
    let bytes = match store.get(FEEDBACK_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return FeedbackRecord::default(),
        Err(err) => {
            tracing::warn!("failed to read feedback record, using default: {}", err);
            return FeedbackRecord::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!("corrupt feedback record, using default: {}", err);
            FeedbackRecord::default()
        }
    }
}

/// Saves the feedback record, overwriting any previous one.
pub fn save_feedback(store: &dyn KeyValueStore, record: &FeedbackRecord) -> Result<()> {
    let bytes = serde_json::to_vec(record)?;
    store.put(FEEDBACK_KEY, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_store::MemoryStore;

    #[test]
    fn test_load_absent_returns_default() {
        let store = MemoryStore::new();
        assert_eq!(load_feedback(&store), FeedbackRecord::default());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let store = MemoryStore::with_entry(FEEDBACK_KEY, b"!!!");
        assert_eq!(load_feedback(&store), FeedbackRecord::default());
    }

    #[test]
    fn test_vote_and_submit_round_trip() {
        let store = MemoryStore::new();
        let mut record = load_feedback(&store);
        record.vote(true);
        record.submit("more desserts please");
        save_feedback(&store, &record).unwrap();

        let loaded = load_feedback(&store);
        assert_eq!(loaded.helpful, 48);
        assert_eq!(loaded.comment, "more desserts please");
        assert!(loaded.submitted);
    }
}
