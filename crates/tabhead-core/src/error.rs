//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabhead_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] tabhead_tabs::TabError),

    #[error("Malformed persisted tabs: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
