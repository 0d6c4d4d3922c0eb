//! Widget persistence
//!
//! Two keys: the JSON tab array and the active tab id as a decimal string.
//! Reads happen once at mount. Writes are fire-and-forget: a failed write is
//! logged and the widget carries on with its in-memory state.

use std::sync::Arc;

use tabhead_storage::{Database, KeyValueStore, MemoryStore};
use tabhead_tabs::{Tab, TabId};

use crate::config::Config;
use crate::Result;

/// Raw state read back from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub tabs: Option<Vec<Tab>>,
    pub active_tab: Option<TabId>,
}

#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
    tabs_key: String,
    active_tab_key: String,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self {
            store,
            tabs_key: config.tabs_key.clone(),
            active_tab_key: config.active_tab_key.clone(),
        }
    }

    /// Open the SQLite store at `config.database_path`
    pub fn open(config: &Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        tracing::info!(path = %config.database_path.display(), "Opened tab storage");

        Ok(Self::new(Arc::new(db), config))
    }

    pub fn in_memory(config: &Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// Read both keys. Malformed tab JSON is an error; a malformed active id
    /// is treated as absent.
    pub fn load(&self) -> Result<PersistedState> {
        let tabs = match self.store.get_item(&self.tabs_key)? {
            Some(raw) if !raw.is_empty() => Some(serde_json::from_str::<Vec<Tab>>(&raw)?),
            _ => None,
        };

        let active_tab = self
            .store
            .get_item(&self.active_tab_key)?
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| match raw.trim().parse::<TabId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring unreadable active tab id");
                    None
                }
            });

        Ok(PersistedState { tabs, active_tab })
    }

    pub fn save_tabs(&self, tabs: &[Tab]) {
        let json = match serde_json::to_string(tabs) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize tabs");
                return;
            }
        };

        if let Err(e) = self.store.set_item(&self.tabs_key, &json) {
            tracing::warn!(key = %self.tabs_key, error = %e, "Failed to persist tabs");
        }
    }

    pub fn save_active_tab(&self, id: TabId) {
        if let Err(e) = self.store.set_item(&self.active_tab_key, &id.to_string()) {
            tracing::warn!(key = %self.active_tab_key, error = %e, "Failed to persist active tab");
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("tabs_key", &self.tabs_key)
            .field("active_tab_key", &self.active_tab_key)
            .finish_non_exhaustive()
    }
}
