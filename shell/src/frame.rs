//! Page frame

use serde::Serialize;
use tabhead_core::HeaderView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub title: String,
    pub subtitle: String,
}

/// Everything the page draws: the static header plus the mounted widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub frame: Frame,
    pub tab_header: HeaderView,
}

impl Frame {
    pub fn render(&self, tab_header: HeaderView) -> ShellView {
        ShellView {
            frame: self.clone(),
            tab_header,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            title: "Dynamic Tab Header Demo".to_string(),
            subtitle: "Interactive tab management with overflow handling".to_string(),
        }
    }
}
