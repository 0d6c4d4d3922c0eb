//! Visible / overflow split
//!
//! Derived from the tab sequence on every read, never stored.

use crate::tab::{Tab, TabId};

/// Tabs past this index are only reachable through the overflow menu
pub const OVERFLOW_THRESHOLD: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    /// Leading tabs rendered inline
    pub visible: &'a [Tab],
    /// Remaining tabs rendered in the dropdown
    pub overflow: &'a [Tab],
}

impl<'a> Partition<'a> {
    pub fn of(tabs: &'a [Tab], threshold: usize) -> Self {
        let (visible, overflow) = tabs.split_at(threshold.min(tabs.len()));
        Self { visible, overflow }
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    pub fn visible_index(&self, id: TabId) -> Option<usize> {
        self.visible.iter().position(|t| t.id == id)
    }

    pub fn is_visible(&self, id: TabId) -> bool {
        self.visible_index(id).is_some()
    }
}
