//! After-render effects
//!
//! Actions that need the new layout (scrolling, focusing an input) are
//! queued here and run, in order, when the host reports that it has
//! rendered the latest state.

use std::collections::VecDeque;

use tabhead_tabs::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Centre the tab in the visible strip, if it is rendered there
    ScrollIntoView(TabId),
    /// Focus the inline title editor of the tab
    FocusTitleInput(TabId),
}

#[derive(Debug, Default)]
pub(crate) struct EffectQueue {
    pending: VecDeque<Effect>,
}

impl EffectQueue {
    pub(crate) fn push(&mut self, effect: Effect) {
        tracing::trace!(?effect, "Queued effect");
        self.pending.push_back(effect);
    }

    pub(crate) fn take(&mut self) -> Vec<Effect> {
        self.pending.drain(..).collect()
    }

    pub(crate) fn pending(&self) -> impl Iterator<Item = &Effect> {
        self.pending.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}
