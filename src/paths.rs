//! Path utilities for determining data storage locations.
//!
//! All tickler data lives in `~/.tickler/`: the persisted task list, the
//! UI flags, and the configuration file.

use std::path::PathBuf;

/// The base directory name for tickler data.
const DATA_DIR_NAME: &str = ".tickler";

/// The configuration filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the base data directory for tickler.
///
/// Returns `~/.tickler/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the configuration file path.
///
/// Returns `~/.tickler/config.yaml` or `None` if the home directory cannot
/// be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILENAME))
}
