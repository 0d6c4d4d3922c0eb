//! Tabhead Core
//!
//! The tab header widget: a scrollable strip of tabs, an overflow dropdown
//! and the active tab's content panel. The widget owns all state; the host
//! only renders [`HeaderView`] and reports layout back through
//! [`TabStripLayout`].

mod config;
mod effects;
mod error;
mod event;
mod header;
mod layout;
mod persistence;
mod view;

pub use config::Config;
pub use effects::Effect;
pub use error::CoreError;
pub use event::{PointerTarget, UiEvent};
pub use header::TabHeader;
pub use layout::{scroll_left_for, ScrollBehavior, ScrollRequest, TabBounds, TabStripLayout};
pub use persistence::{PersistedState, Persistence};
pub use view::{
    ContentPanel, DropdownMenuView, DropdownView, HeaderView, MenuItemView, TabItemView,
};

// Re-export the model and storage layers
pub use tabhead_storage::{Database, KeyValueStore, MemoryStore, StorageError};
pub use tabhead_tabs::{EditKey, Partition, Tab, TabError, TabId, TabList, OVERFLOW_THRESHOLD};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
