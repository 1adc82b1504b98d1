//! Unified path management for yumdeck state files.
//!
//! All persisted state lives under a single per-user data directory so the
//! store can be inspected or wiped in one place.
//!
//! ```text
//! ~/.local/share/yumdeck/        # Data directory (platform-dependent)
//! ├── someyum_seen.json          # Seen identifier list
//! ├── someyum_favorites.json     # Favorited identifier list
//! └── feedback_someyum.json      # Feedback record
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot find platform data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for yumdeck.
pub struct YumdeckPaths;

impl YumdeckPaths {
    /// Returns the yumdeck data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the data directory (e.g., `~/.local/share/yumdeck/`)
    /// - `Err(PathError::DataDirNotFound)`: Could not determine the directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("yumdeck"))
            .ok_or(PathError::DataDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_ends_with_app_name() {
        // dirs::data_dir is available on every supported platform in CI.
        let dir = YumdeckPaths::data_dir().unwrap();
        assert!(dir.ends_with("yumdeck"));
    }
}
