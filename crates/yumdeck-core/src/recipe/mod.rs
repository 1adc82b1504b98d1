//! Recipe domain models.

pub mod builtin;
pub mod catalog;
pub mod model;

pub use builtin::builtin_catalog;
pub use catalog::Catalog;
pub use model::{Difficulty, Recipe};
