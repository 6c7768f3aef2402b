//! Path resolution for sleeptrack configuration.
//!
//! Settings live in `~/.sleeptrack/config.yaml`.

use std::path::PathBuf;

use crate::error::TrackerError;

/// Paths to sleeptrack configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.sleeptrack/`
    pub root: PathBuf,
    /// Config file: `~/.sleeptrack/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let home = std::env::var("HOME").map_err(|_| {
            TrackerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".sleeptrack")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}
