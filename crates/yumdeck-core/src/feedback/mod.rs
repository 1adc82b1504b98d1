//! Feedback widget state.

pub mod model;
pub mod store;

pub use model::FeedbackRecord;
pub use store::{load_feedback, save_feedback};
