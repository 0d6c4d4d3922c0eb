//! Tabhead Storage Layer
//!
//! Durable key-value persistence for the tab header widget.
//! Values are opaque strings; callers own their encoding.

mod database;
mod error;
mod memory;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
