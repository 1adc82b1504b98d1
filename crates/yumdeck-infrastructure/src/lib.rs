//! Concrete storage backends for the yumdeck core.
//!
//! The core crate defines the `KeyValueStore` capability; this crate
//! provides the file-backed implementation used by real installations, an
//! in-memory implementation for tests and ephemeral runs, and unified path
//! management.

pub mod file_store;
pub mod memory_store;
pub mod paths;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use paths::YumdeckPaths;
