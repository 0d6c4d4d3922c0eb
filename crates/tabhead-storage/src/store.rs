//! Key-value store abstraction
//!
//! The widget never talks to a concrete backend. It is handed a store at
//! mount time so tests can swap in [`crate::MemoryStore`].

use crate::Result;

pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
