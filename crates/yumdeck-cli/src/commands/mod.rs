pub mod feedback;
pub mod reset;
pub mod saved;
pub mod stats;
pub mod swipe;
pub mod utils;
