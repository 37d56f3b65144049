//! File-backed local key-value storage.
//!
//! This is the production [`LocalStore`]: each key is a file under a data
//! directory, with the value stored verbatim. Keys are sanitized to a safe
//! filename, so callers can use the same namespaced key strings the
//! browser original used.

use crate::error::Result;
use crate::traits::LocalStore;
use std::path::{Path, PathBuf};

/// File-per-key local store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Create a store rooted at the default data directory (`~/.tickler/`).
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn in_data_dir() -> Option<Self> {
        crate::paths::data_dir().map(Self::new)
    }

    /// Get the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        let name: String =
            key.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '-' }).collect();
        self.root.join(format!("{name}.json"))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
