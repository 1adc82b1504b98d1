//! Feedback record model.

use serde::{Deserialize, Serialize};

/// Count displayed before any local vote has been recorded.
const SEED_HELPFUL_COUNT: u32 = 47;

/// Persisted state of the feedback widget.
///
/// The flow is ask -> comment -> done: a vote moves the counter, submitting
/// stores the comment and marks the record final. Once `submitted` is set
/// the widget only displays the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// How many people found the tool helpful.
    #[serde(default = "default_helpful")]
    pub helpful: u32,
    /// Free-form comment, possibly empty.
    #[serde(default)]
    pub comment: String,
    /// Whether feedback has been submitted from this installation.
    #[serde(default)]
    pub submitted: bool,
}

fn default_helpful() -> u32 {
    SEED_HELPFUL_COUNT
}

impl Default for FeedbackRecord {
    fn default() -> Self {
        Self {
            helpful: SEED_HELPFUL_COUNT,
            comment: String::new(),
            submitted: false,
        }
    }
}

impl FeedbackRecord {
    /// Records a helpfulness vote. Only a "yes" moves the counter.
    pub fn vote(&mut self, helpful: bool) {
        if helpful {
            self.helpful += 1;
        }
    }

    /// Stores the free-form comment and marks the record submitted.
    pub fn submit(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_uses_seed_count() {
        let record = FeedbackRecord::default();
        assert_eq!(record.helpful, 47);
        assert!(!record.submitted);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let record: FeedbackRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.helpful, 47);
        assert_eq!(record.comment, "");
        assert!(!record.submitted);
    }

    #[test]
    fn test_only_yes_votes_count() {
        let mut record = FeedbackRecord::default();
        record.vote(false);
        assert_eq!(record.helpful, 47);
        record.vote(true);
        assert_eq!(record.helpful, 48);
    }

    #[test]
    fn test_submit_stores_comment() {
        let mut record = FeedbackRecord::default();
        record.submit("love the swipes");
        assert!(record.submitted);
        assert_eq!(record.comment, "love the swipes");
    }
}
