//! Scroll-into-view geometry
//!
//! The widget does not own a render tree. The host exposes measured geometry
//! of the visible tab strip through [`TabStripLayout`] and the widget decides
//! where to scroll.

use serde::{Deserialize, Serialize};

use tabhead_tabs::TabId;

/// Measured box of one tab element, relative to the strip's scroll origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabBounds {
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub left: f64,
    pub behavior: ScrollBehavior,
}

/// Host-side view of the rendered tab strip
pub trait TabStripLayout {
    /// Width of the visible-tabs container, `None` while it is not mounted
    fn viewport_width(&self) -> Option<f64>;

    /// Bounds of the `index`-th visible tab element, `None` if not mounted
    fn tab_bounds(&self, index: usize) -> Option<TabBounds>;

    fn scroll_to(&mut self, request: ScrollRequest);

    /// Move keyboard focus into the title input of a tab being edited
    fn focus_title_input(&mut self, id: TabId);
}

/// Scroll offset that centres `tab` in a viewport of the given width
pub fn scroll_left_for(tab: TabBounds, viewport_width: f64) -> f64 {
    (tab.left - viewport_width / 2.0 + tab.width / 2.0).max(0.0)
}

/// Build the scroll request for the `index`-th visible tab, if it is mounted
pub(crate) fn scroll_request<L>(layout: &L, index: usize) -> Option<ScrollRequest>
where
    L: TabStripLayout + ?Sized,
{
    let viewport_width = layout.viewport_width()?;
    let bounds = layout.tab_bounds(index)?;

    Some(ScrollRequest {
        left: scroll_left_for(bounds, viewport_width),
        behavior: ScrollBehavior::Smooth,
    })
}
