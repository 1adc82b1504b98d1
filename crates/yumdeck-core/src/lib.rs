pub mod deck;
pub mod error;
pub mod feedback;
pub mod recipe;
pub mod storage;

// Re-export common error type
pub use error::DeckError;

pub use deck::{DeckCounts, DeckEngine, DeckStatus, Direction, Swipe};
pub use recipe::{Catalog, Difficulty, Recipe};
