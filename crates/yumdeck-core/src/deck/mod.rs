//! The swipe-deck engine and its value types.

pub mod engine;
pub mod model;
pub mod shuffle;

pub use engine::DeckEngine;
pub use model::{DeckCounts, DeckStatus, Direction, Swipe};
pub use shuffle::{IdentityShuffler, Shuffler, ThreadRngShuffler};
