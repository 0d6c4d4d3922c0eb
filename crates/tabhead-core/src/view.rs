//! Render model
//!
//! A pure projection of widget state into what the host draws. Recomputed
//! on every read; nothing here is cached between renders.

use serde::Serialize;

use tabhead_tabs::{Tab, TabId, TabList};

const ADD_TAB_LABEL: &str = "Add new tab";
const CLOSE_TAB_LABEL: &str = "Close tab";
const MENU_LABEL: &str = "Additional tabs";
const CONTENT_BODY: &str =
    "This is the content area for the active tab. Replace this with your actual content.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    /// Inline tabs, in order
    pub tabs: Vec<TabItemView>,
    /// Present only when some tabs overflow
    pub dropdown: Option<DropdownView>,
    pub add_button_label: String,
    pub content: ContentPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItemView {
    pub id: TabId,
    /// Value of the `data-tab-id` attribute
    pub data_tab_id: String,
    pub title: String,
    pub active: bool,
    /// Initial value of the inline editor; `None` when not editing
    pub edit_value: Option<String>,
    pub close_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownView {
    pub toggle_label: String,
    pub toggle_text: String,
    pub expanded: bool,
    pub has_popup: bool,
    pub menu: Option<DropdownMenuView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownMenuView {
    /// Changes whenever the tab sequence changes, forcing a fresh menu
    pub key: String,
    pub role: String,
    pub label: String,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub id: TabId,
    pub title: String,
    pub active: bool,
    pub role: String,
    pub close_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPanel {
    pub heading: String,
    pub body: String,
}

impl HeaderView {
    pub fn build(tabs: &TabList, active: TabId, dropdown_open: bool, threshold: usize) -> Self {
        let split = tabs.partition(threshold);

        let items = split
            .visible
            .iter()
            .map(|tab| TabItemView::build(tab, active))
            .collect();

        let dropdown = split.has_overflow().then(|| {
            let count = split.overflow.len();
            DropdownView {
                toggle_label: format!("More tabs ({})", count),
                toggle_text: format!("\u{22ef} ({})", count),
                expanded: dropdown_open,
                has_popup: true,
                menu: dropdown_open.then(|| DropdownMenuView::build(tabs, split.overflow, active)),
            }
        });

        let active_title = tabs.get(active).map(|t| t.title.as_str()).unwrap_or_default();

        Self {
            tabs: items,
            dropdown,
            add_button_label: ADD_TAB_LABEL.to_string(),
            content: ContentPanel {
                heading: format!("Content for {}", active_title),
                body: CONTENT_BODY.to_string(),
            },
        }
    }

    pub fn visible_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    pub fn overflow_ids(&self) -> Vec<TabId> {
        self.dropdown
            .as_ref()
            .and_then(|d| d.menu.as_ref())
            .map(|m| m.items.iter().map(|i| i.id).collect())
            .unwrap_or_default()
    }
}

impl TabItemView {
    fn build(tab: &Tab, active: TabId) -> Self {
        Self {
            id: tab.id,
            data_tab_id: tab.id.to_string(),
            title: tab.title.clone(),
            active: tab.id == active,
            edit_value: tab.is_editing.then(|| tab.title.clone()),
            close_label: CLOSE_TAB_LABEL.to_string(),
        }
    }
}

impl DropdownMenuView {
    fn build(tabs: &TabList, overflow: &[Tab], active: TabId) -> Self {
        let ids: Vec<String> = overflow.iter().map(|t| t.id.to_string()).collect();

        Self {
            key: format!("dropdown-{}-{}", tabs.len(), ids.join("-")),
            role: "menu".to_string(),
            label: MENU_LABEL.to_string(),
            items: overflow
                .iter()
                .map(|tab| MenuItemView {
                    id: tab.id,
                    title: tab.title.clone(),
                    active: tab.id == active,
                    role: "menuitem".to_string(),
                    close_label: format!("Close {}", tab.title),
                })
                .collect(),
        }
    }
}
