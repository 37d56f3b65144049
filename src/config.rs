//! Configuration for the task store and reminder engine.
//!
//! Settings live in `~/.tickler/config.yaml`. A missing file yields the
//! defaults; a present-but-invalid file is an error so a typo does not
//! silently reset behavior.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where newly added tasks are inserted in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// New tasks go to the front of the list (default).
    #[default]
    Prepend,
    /// New tasks go to the end of the list.
    Append,
}

/// Application configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Insertion policy for newly added tasks.
    #[serde(default)]
    pub insert: InsertPosition,

    /// Reminder poll interval in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

/// Default poll interval (seconds) when unconfigured.
const fn default_poll_interval() -> u64 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { insert: InsertPosition::default(), poll_interval_secs: default_poll_interval() }
    }
}

impl AppConfig {
    /// Load config from the default location, falling back to defaults if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match crate::paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
