//! Widget configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tabhead_tabs::OVERFLOW_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file backing the key-value store
    pub database_path: PathBuf,
    /// Number of tabs rendered inline before the rest spill into the dropdown
    pub overflow_threshold: usize,
    /// Storage key holding the serialized tab collection
    pub tabs_key: String,
    /// Storage key holding the active tab id
    pub active_tab_key: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabhead.db"),
            overflow_threshold: OVERFLOW_THRESHOLD,
            tabs_key: "dynamicTabs".to_string(),
            active_tab_key: "activeTab".to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("tabhead"))
            .unwrap_or_else(|| PathBuf::from(".tabhead"))
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.overflow_threshold == 0 {
            return Err(crate::CoreError::Config(
                "overflow_threshold must be at least 1".to_string(),
            ));
        }
        if self.tabs_key.is_empty() || self.active_tab_key.is_empty() {
            return Err(crate::CoreError::Config(
                "storage keys cannot be empty".to_string(),
            ));
        }
        if self.tabs_key == self.active_tab_key {
            return Err(crate::CoreError::Config(
                "tabs_key and active_tab_key must differ".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
