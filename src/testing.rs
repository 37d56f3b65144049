//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit and integration tests.

#![allow(dead_code)]

use crate::error::{Error, Result};
use crate::traits::{LocalStore, Notifier};
use std::collections::HashMap;

/// An in-memory [`LocalStore`] that counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls made against this store.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A [`LocalStore`] whose writes always fail, for exercising the
/// best-effort persistence policy (quota exceeded, disabled storage).
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    /// Whether reads fail too.
    fail_reads: bool,
}

impl FailingStore {
    /// A store where reads fail as well as writes.
    #[must_use]
    pub const fn unreadable() -> Self {
        Self { fail_reads: true }
    }

    fn storage_error(op: &str) -> Error {
        Error::Io(std::io::Error::other(format!("storage {op} unavailable")))
    }
}

impl LocalStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Self::storage_error("read"));
        }
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Self::storage_error("write"))
    }
}

/// A [`Notifier`] that records every message it is asked to deliver.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    /// Messages in delivery order.
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.writes(), 0);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.get("k").unwrap().unwrap(), "v2");
    }

    #[test]
    fn test_failing_store_write_errors() {
        let mut store = FailingStore::default();
        assert!(store.get("k").unwrap().is_none());
        assert!(store.set("k", "v").is_err());
    }

    #[test]
    fn test_unreadable_store_read_errors() {
        let store = FailingStore::unreadable();
        assert!(store.get("k").is_err());
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::default();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages, vec!["first", "second"]);
    }
}
