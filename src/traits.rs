//! Core traits for testability and abstraction.
//!
//! The task store and reminder engine talk to the outside world through two
//! seams: a string key-value store (the stand-in for the browser's
//! localStorage) and a notification channel. Both are traits so tests can
//! substitute in-memory or failure-injecting implementations.

use crate::error::Result;

/// Trait for local key-value persistence.
///
/// Values are opaque strings; the task store serializes the whole collection
/// to JSON and writes it under a single fixed key on every mutation.
pub trait LocalStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written
    /// (e.g. quota exceeded, disabled storage).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Trait for the user-visible notification channel.
///
/// The contract is one discrete notification per reminder event, containing
/// the task's text. What widget renders it is up to the implementation.
pub trait Notifier {
    /// Deliver a single notification message to the user.
    fn notify(&mut self, message: &str);
}

/// A notifier that prints each message to stdout.
///
/// This is the CLI's alert mechanism: one line per reminder event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
