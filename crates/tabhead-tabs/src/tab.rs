//! Tab data structure
//!
//! Wire shape is `{"id": 1, "title": "Tab 1", "isEditing": false}`.

use serde::{Deserialize, Serialize};

pub type TabId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique identifier, never reused
    pub id: TabId,
    /// Display title
    pub title: String,
    /// True while the title is being edited inline
    #[serde(default)]
    pub is_editing: bool,
}

impl Tab {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            title: Self::default_title(id),
            is_editing: false,
        }
    }

    pub fn default_title(id: TabId) -> String {
        format!("Tab {}", id)
    }

    /// Apply an edited title. Returns false when the trimmed title is empty,
    /// in which case the old title is kept.
    pub fn rename(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        self.is_editing = false;

        if trimmed.is_empty() {
            return false;
        }

        self.title = trimmed.to_string();
        true
    }
}
