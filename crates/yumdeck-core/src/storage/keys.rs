//! Fixed storage keys for persisted state.
//!
//! The key names are part of the persisted layout and must not change, or
//! existing swipe history becomes invisible to new builds.

/// Key holding the JSON array of seen recipe identifiers.
pub const SEEN_KEY: &str = "someyum_seen";

/// Key holding the JSON array of favorited recipe identifiers.
pub const FAVORITES_KEY: &str = "someyum_favorites";

/// Key holding the feedback record.
pub const FEEDBACK_KEY: &str = "feedback_someyum";
