//! Ordered tab collection
//!
//! Owns the tabs and the id counter. Every mutation here keeps three
//! invariants: at least one tab, unique ids below `next_id`, and at most one
//! tab in editing mode.

use std::collections::HashSet;

use crate::error::TabError;
use crate::partition::Partition;
use crate::tab::{Tab, TabId};
use crate::Result;

/// Outcome of committing an inline title edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleEdit {
    Renamed,
    /// Blank input, old title kept
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabList {
    tabs: Vec<Tab>,
    next_id: TabId,
}

impl TabList {
    /// The two tabs a fresh widget starts with
    pub fn with_defaults() -> Self {
        Self {
            tabs: vec![Tab::new(1), Tab::new(2)],
            next_id: 3,
        }
    }

    /// Rebuild from persisted tabs. The counter resumes after the largest id.
    pub fn from_tabs(tabs: Vec<Tab>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tabs.len());
        if let Some(dup) = tabs.iter().find(|t| !seen.insert(t.id)) {
            return Err(TabError::DuplicateId(dup.id));
        }

        let max_id = tabs.iter().map(|t| t.id).max().ok_or(TabError::Empty)?;
        let next_id = max_id.checked_add(1).ok_or(TabError::IdExhausted)?;

        Ok(Self { tabs, next_id })
    }

    /// Append a new default tab and return its id
    pub fn push_new(&mut self) -> Result<TabId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(TabError::IdExhausted)?;
        self.tabs.push(Tab::new(id));

        tracing::debug!(tab_id = id, count = self.tabs.len(), "Appended tab");

        Ok(id)
    }

    /// Remove a tab, returning the index it occupied
    pub fn remove(&mut self, id: TabId) -> Result<usize> {
        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }

        let index = self.position(id).ok_or(TabError::NotFound(id))?;
        self.tabs.remove(index);
        Ok(index)
    }

    /// Put one tab in editing mode and take every other tab out of it
    pub fn start_editing(&mut self, id: TabId) -> Result<()> {
        if !self.contains(id) {
            return Err(TabError::NotFound(id));
        }

        for tab in &mut self.tabs {
            tab.is_editing = tab.id == id;
        }
        Ok(())
    }

    pub fn save_title(&mut self, id: TabId, raw: &str) -> Result<TitleEdit> {
        let tab = self.get_mut(id)?;
        if tab.rename(raw) {
            Ok(TitleEdit::Renamed)
        } else {
            Ok(TitleEdit::Discarded)
        }
    }

    pub fn cancel_editing(&mut self, id: TabId) -> Result<()> {
        self.get_mut(id)?.is_editing = false;
        Ok(())
    }

    /// Clear any editing flag, e.g. after loading persisted tabs
    pub fn clear_editing(&mut self) {
        for tab in &mut self.tabs {
            tab.is_editing = false;
        }
    }

    pub fn get(&self, id: TabId) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == id)
            .ok_or(TabError::NotFound(id))
    }

    fn get_mut(&mut self, id: TabId) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TabError::NotFound(id))
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.position(id).is_some()
    }

    pub fn first_id(&self) -> Option<TabId> {
        self.tabs.first().map(|t| t.id)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn next_id(&self) -> TabId {
        self.next_id
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    pub fn as_slice(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn partition(&self, threshold: usize) -> Partition<'_> {
        Partition::of(&self.tabs, threshold)
    }
}

impl Default for TabList {
    fn default() -> Self {
        Self::with_defaults()
    }
}
