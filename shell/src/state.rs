//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;

use tabhead_core::{Config, CoreError, Persistence, Result, TabHeader};

use crate::frame::{Frame, ShellView};

/// Thread-safe wrapper around the mounted widget
pub struct AppState {
    header: Arc<RwLock<Option<TabHeader>>>,
    frame: Frame,
}

impl AppState {
    /// Mount against the SQLite store named by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let persistence = Persistence::open(config)?;
        Self::mount(persistence, config)
    }

    pub fn mount(persistence: Persistence, config: &Config) -> Result<Self> {
        let header = TabHeader::mount(persistence, config)?;

        Ok(Self {
            header: Arc::new(RwLock::new(Some(header))),
            frame: Frame::default(),
        })
    }

    pub fn with_header<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TabHeader) -> Result<T>,
    {
        let guard = self.header.read();
        match guard.as_ref() {
            Some(header) => f(header),
            None => Err(not_mounted()),
        }
    }

    pub fn with_header_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TabHeader) -> Result<T>,
    {
        let mut guard = self.header.write();
        match guard.as_mut() {
            Some(header) => f(header),
            None => Err(not_mounted()),
        }
    }

    pub fn render(&self) -> Result<ShellView> {
        self.with_header(|header| Ok(self.frame.render(header.view())))
    }

    /// Unmount the widget; later calls fail until the state is rebuilt
    pub fn shutdown(&self) {
        if let Some(mut header) = self.header.write().take() {
            header.unmount();
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            header: Arc::clone(&self.header),
            frame: self.frame.clone(),
        }
    }
}

fn not_mounted() -> CoreError {
    CoreError::Config("tab header is not mounted".to_string())
}
