//! Tab header widget
//!
//! Owns the tab collection, the active tab and the overflow dropdown.
//! Every action runs synchronously; anything that needs the rendered layout
//! is queued as an [`Effect`] and applied by [`TabHeader::after_render`].

use tabhead_tabs::{EditKey, Partition, Tab, TabError, TabId, TabList, TitleEdit};

use crate::config::Config;
use crate::effects::{Effect, EffectQueue};
use crate::event::{PointerTarget, UiEvent};
use crate::layout::{self, TabStripLayout};
use crate::persistence::Persistence;
use crate::view::HeaderView;
use crate::Result;

#[derive(Debug)]
pub struct TabHeader {
    tabs: TabList,
    active_tab: TabId,
    /// Also decides whether the outside-click listener is attached
    dropdown_open: bool,
    overflow_threshold: usize,
    persistence: Persistence,
    effects: EffectQueue,
}

impl TabHeader {
    /// Rehydrate from storage, or start with the two default tabs
    pub fn mount(persistence: Persistence, config: &Config) -> Result<Self> {
        config.validate()?;

        let saved = persistence.load()?;

        let tabs = match saved.tabs {
            Some(tabs) if !tabs.is_empty() => {
                let mut list = TabList::from_tabs(tabs)?;
                list.clear_editing();
                list
            }
            Some(_) => {
                tracing::warn!("Persisted tab list is empty, starting with defaults");
                TabList::with_defaults()
            }
            None => TabList::with_defaults(),
        };

        let first = tabs.first_id().ok_or(TabError::Empty)?;
        let active_tab = match saved.active_tab {
            Some(id) if tabs.contains(id) => id,
            Some(id) => {
                tracing::warn!(tab_id = id, "Persisted active tab no longer exists");
                first
            }
            None => first,
        };

        let header = Self {
            tabs,
            active_tab,
            dropdown_open: false,
            overflow_threshold: config.overflow_threshold,
            persistence,
            effects: EffectQueue::default(),
        };

        header.persist_tabs();
        header.persist_active_tab();

        tracing::info!(
            tab_count = header.tabs.len(),
            active_tab = header.active_tab,
            next_id = header.tabs.next_id(),
            "Mounted tab header"
        );

        Ok(header)
    }

    /// Detach listeners and drop pending effects. The widget keeps its tabs
    /// and can be rendered again.
    pub fn unmount(&mut self) {
        self.set_dropdown_open(false);
        self.effects.clear();
        tracing::info!("Unmounted tab header");
    }

    // === Tab actions ===

    /// Append a new tab and make it active. Returns `None` once every id has
    /// been handed out.
    pub fn add_tab(&mut self) -> Option<TabId> {
        let id = match self.tabs.push_new() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(reason = %e, "Cannot add tab");
                return None;
            }
        };
        self.persist_tabs();
        self.set_active(id);
        self.effects.push(Effect::ScrollIntoView(id));

        tracing::info!(tab_id = id, tab_count = self.tabs.len(), "Added tab");

        Some(id)
    }

    /// Remove a tab. Removing the only remaining tab, or an unknown id, does
    /// nothing and returns false.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        let index = match self.tabs.remove(id) {
            Ok(index) => index,
            Err(e) => {
                tracing::debug!(tab_id = id, reason = %e, "Ignored tab removal");
                return false;
            }
        };
        self.persist_tabs();

        let was_in_overflow = index >= self.overflow_threshold;

        if self.active_tab == id {
            if let Some(next) = self.tabs.first_id() {
                self.set_active(next);
                if self.partition().is_visible(next) {
                    self.effects.push(Effect::ScrollIntoView(next));
                }
            }
        }

        if self.tabs.len() <= self.overflow_threshold {
            self.set_dropdown_open(false);
        } else if was_in_overflow && self.dropdown_open {
            tracing::debug!(
                overflow_count = self.partition().overflow.len(),
                "Overflow menu refreshed after removal"
            );
        }

        tracing::info!(tab_id = id, tab_count = self.tabs.len(), "Removed tab");

        true
    }

    /// Close button handler. The click must not also select the tab.
    pub fn close_tab(&mut self, id: TabId, event: &mut UiEvent) -> bool {
        event.stop_propagation();
        self.remove_tab(id)
    }

    pub fn select_tab(&mut self, id: TabId) -> bool {
        if !self.tabs.contains(id) {
            tracing::debug!(tab_id = id, "Ignored selection of unknown tab");
            return false;
        }

        self.set_active(id);
        self.set_dropdown_open(false);
        self.effects.push(Effect::ScrollIntoView(id));
        true
    }

    pub fn start_editing(&mut self, id: TabId) -> bool {
        if let Err(e) = self.tabs.start_editing(id) {
            tracing::debug!(tab_id = id, reason = %e, "Ignored edit request");
            return false;
        }

        self.persist_tabs();
        self.effects.push(Effect::FocusTitleInput(id));
        true
    }

    /// Commit an inline edit. Blank titles are discarded. Only applies to the
    /// tab currently being edited, so a late blur cannot rename a tab whose
    /// edit was already cancelled.
    pub fn save_title(&mut self, id: TabId, new_title: &str) -> bool {
        if !self.is_editing(id) {
            tracing::debug!(tab_id = id, "Ignored title save outside of editing");
            return false;
        }

        match self.tabs.save_title(id, new_title) {
            Ok(TitleEdit::Renamed) => {
                tracing::info!(tab_id = id, title = %new_title.trim(), "Renamed tab");
            }
            Ok(TitleEdit::Discarded) => {
                tracing::debug!(tab_id = id, "Discarded blank title");
            }
            Err(e) => {
                tracing::debug!(tab_id = id, reason = %e, "Ignored title save");
                return false;
            }
        }

        self.persist_tabs();
        true
    }

    /// Keydown inside the inline editor
    pub fn handle_key(&mut self, id: TabId, new_title: &str, key: EditKey) -> bool {
        match key {
            EditKey::Enter => self.save_title(id, new_title),
            EditKey::Escape => self.cancel_editing(id),
            EditKey::Other => false,
        }
    }

    /// Blur of the inline editor commits like Enter
    pub fn blur_title_input(&mut self, id: TabId, new_title: &str) -> bool {
        self.save_title(id, new_title)
    }

    fn cancel_editing(&mut self, id: TabId) -> bool {
        if !self.is_editing(id) {
            return false;
        }

        if let Err(e) = self.tabs.cancel_editing(id) {
            tracing::debug!(tab_id = id, reason = %e, "Ignored edit cancel");
            return false;
        }

        self.persist_tabs();
        true
    }

    // === Dropdown ===

    pub fn toggle_dropdown(&mut self, event: &mut UiEvent) -> bool {
        event.prevent_default();
        event.stop_propagation();

        if !self.has_overflow() {
            tracing::debug!("Ignored dropdown toggle without overflow");
            return false;
        }

        let open = !self.dropdown_open;
        self.set_dropdown_open(open);
        true
    }

    /// Document-level pointer-down. Only observed while the dropdown is open.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if !self.is_dismiss_listener_attached() {
            return;
        }

        if target == PointerTarget::Outside {
            self.set_dropdown_open(false);
        }
    }

    fn set_dropdown_open(&mut self, open: bool) {
        if self.dropdown_open == open {
            return;
        }

        self.dropdown_open = open;

        tracing::debug!(open = open, "Overflow dropdown toggled");
    }

    // === Rendering ===

    pub fn view(&self) -> HeaderView {
        HeaderView::build(
            &self.tabs,
            self.active_tab,
            self.dropdown_open,
            self.overflow_threshold,
        )
    }

    /// Run queued effects against the freshly rendered layout, in the order
    /// the actions queued them. Returns how many effects were drained.
    pub fn after_render<L>(&mut self, strip: &mut L) -> usize
    where
        L: TabStripLayout + ?Sized,
    {
        let effects = self.effects.take();

        for effect in &effects {
            match *effect {
                Effect::ScrollIntoView(id) => self.scroll_into_view(strip, id),
                Effect::FocusTitleInput(id) => {
                    if self.is_editing(id) {
                        strip.focus_title_input(id);
                    }
                }
            }
        }

        effects.len()
    }

    fn scroll_into_view<L>(&self, strip: &mut L, id: TabId)
    where
        L: TabStripLayout + ?Sized,
    {
        let Some(index) = self.partition().visible_index(id) else {
            tracing::debug!(tab_id = id, "Tab not in visible strip, skipping scroll");
            return;
        };

        match layout::scroll_request(&*strip, index) {
            Some(request) => {
                tracing::debug!(tab_id = id, left = request.left, "Scrolling tab into view");
                strip.scroll_to(request);
            }
            None => tracing::debug!(tab_id = id, "Tab strip not mounted, skipping scroll"),
        }
    }

    // === Accessors ===

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.as_slice()
    }

    pub fn tab_list(&self) -> &TabList {
        &self.tabs
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active_tab).ok()
    }

    pub fn next_id(&self) -> TabId {
        self.tabs.next_id()
    }

    pub fn partition(&self) -> Partition<'_> {
        self.tabs.partition(self.overflow_threshold)
    }

    pub fn has_overflow(&self) -> bool {
        self.partition().has_overflow()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// The document listener exists only while there is a menu to dismiss
    pub fn is_dismiss_listener_attached(&self) -> bool {
        self.dropdown_open
    }

    pub fn pending_effects(&self) -> Vec<Effect> {
        self.effects.pending().copied().collect()
    }

    fn is_editing(&self, id: TabId) -> bool {
        self.tabs.get(id).map(|t| t.is_editing).unwrap_or(false)
    }

    // === Persistence ===

    fn set_active(&mut self, id: TabId) {
        if self.active_tab == id {
            return;
        }

        self.active_tab = id;
        self.persist_active_tab();
    }

    fn persist_tabs(&self) {
        self.persistence.save_tabs(self.tabs.as_slice());
    }

    fn persist_active_tab(&self) {
        self.persistence.save_active_tab(self.active_tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ScrollBehavior, ScrollRequest, TabBounds};
    use crate::{CoreError, Persistence};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tabhead_storage::{KeyValueStore, MemoryStore};

    const TAB_WIDTH: f64 = 100.0;

    /// Strip of equally sized tabs in a 300px viewport
    #[derive(Default)]
    struct FakeStrip {
        mounted_tabs: usize,
        scrolls: Vec<ScrollRequest>,
        focused: Vec<TabId>,
    }

    impl FakeStrip {
        fn with_tabs(count: usize) -> Self {
            Self {
                mounted_tabs: count,
                ..Self::default()
            }
        }
    }

    impl TabStripLayout for FakeStrip {
        fn viewport_width(&self) -> Option<f64> {
            (self.mounted_tabs > 0).then_some(300.0)
        }

        fn tab_bounds(&self, index: usize) -> Option<TabBounds> {
            (index < self.mounted_tabs).then(|| TabBounds {
                left: index as f64 * TAB_WIDTH,
                width: TAB_WIDTH,
            })
        }

        fn scroll_to(&mut self, request: ScrollRequest) {
            self.scrolls.push(request);
        }

        fn focus_title_input(&mut self, id: TabId) {
            self.focused.push(id);
        }
    }

    fn config() -> Config {
        Config::new(PathBuf::from("/tmp/tabhead-test"))
    }

    fn mount_with(store: &MemoryStore) -> TabHeader {
        let persistence = Persistence::new(Arc::new(store.clone()), &config());
        TabHeader::mount(persistence, &config()).unwrap()
    }

    fn mount() -> (TabHeader, MemoryStore) {
        let store = MemoryStore::new();
        (mount_with(&store), store)
    }

    /// Header holding ids 1..=count
    fn mount_with_tabs(count: usize) -> (TabHeader, MemoryStore) {
        let (mut header, store) = mount();
        while header.tabs().len() < count {
            header.add_tab();
        }
        header.select_tab(1);
        header.effects.clear();
        (header, store)
    }

    fn ids(header: &TabHeader) -> Vec<TabId> {
        header.tabs().iter().map(|t| t.id).collect()
    }

    fn open_dropdown(header: &mut TabHeader) {
        assert!(header.toggle_dropdown(&mut UiEvent::new()));
        assert!(header.is_dropdown_open());
    }

    #[test]
    fn test_mount_defaults() {
        let (header, store) = mount();

        assert_eq!(ids(&header), vec![1, 2]);
        assert_eq!(header.active_tab(), 1);
        assert_eq!(header.next_id(), 3);
        assert!(!header.is_dropdown_open());

        // Mount writes both keys once
        assert_eq!(
            store.get_item("dynamicTabs").unwrap().as_deref(),
            Some(r#"[{"id":1,"title":"Tab 1","isEditing":false},{"id":2,"title":"Tab 2","isEditing":false}]"#)
        );
        assert_eq!(store.get_item("activeTab").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_mount_rehydrates() {
        let store = MemoryStore::new();
        store
            .set_item(
                "dynamicTabs",
                r#"[{"id":4,"title":"Mail","isEditing":true},{"id":9,"title":"Docs","isEditing":false}]"#,
            )
            .unwrap();
        store.set_item("activeTab", "9").unwrap();

        let header = mount_with(&store);

        assert_eq!(ids(&header), vec![4, 9]);
        assert_eq!(header.next_id(), 10);
        assert_eq!(header.active_tab(), 9);
        assert_eq!(header.active().unwrap().title, "Docs");
        assert!(header.tabs().iter().all(|t| !t.is_editing));
    }

    #[test]
    fn test_mount_falls_back_to_first_tab() {
        let store = MemoryStore::new();
        store
            .set_item("dynamicTabs", r#"[{"id":5,"title":"A"},{"id":6,"title":"B"}]"#)
            .unwrap();
        store.set_item("activeTab", "77").unwrap();

        assert_eq!(mount_with(&store).active_tab(), 5);

        store.set_item("activeTab", "not-a-number").unwrap();
        assert_eq!(mount_with(&store).active_tab(), 5);
    }

    #[test]
    fn test_mount_empty_list_uses_defaults() {
        let store = MemoryStore::new();
        store.set_item("dynamicTabs", "[]").unwrap();

        let header = mount_with(&store);
        assert_eq!(ids(&header), vec![1, 2]);
        assert_eq!(header.next_id(), 3);
    }

    #[test]
    fn test_mount_rejects_malformed_tabs() {
        let store = MemoryStore::new();
        store.set_item("dynamicTabs", "{not json").unwrap();

        let persistence = Persistence::new(Arc::new(store), &config());
        let err = TabHeader::mount(persistence, &config()).unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_reload_round_trip() {
        let (mut header, store) = mount();
        header.add_tab();
        header.start_editing(3);
        header.handle_key(3, "Reports", EditKey::Enter);
        header.select_tab(2);
        let before = header.tabs().to_vec();

        let reloaded = mount_with(&store);
        assert_eq!(reloaded.tabs(), before.as_slice());
        assert_eq!(reloaded.active_tab(), 2);
        assert_eq!(reloaded.next_id(), 4);
    }

    #[test]
    fn test_add_tab() {
        let (mut header, store) = mount();

        let id = header.add_tab();

        assert_eq!(id, Some(3));
        assert_eq!(ids(&header), vec![1, 2, 3]);
        assert_eq!(header.tabs()[2].title, "Tab 3");
        assert_eq!(header.active_tab(), 3);
        assert_eq!(header.next_id(), 4);
        assert_eq!(header.pending_effects(), vec![Effect::ScrollIntoView(3)]);
        assert_eq!(store.get_item("activeTab").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_add_then_render_scrolls_to_new_tab() {
        let (mut header, _store) = mount_with_tabs(9);
        let id = header.add_tab();
        assert_eq!(id, Some(10));

        let mut strip = FakeStrip::with_tabs(10);
        assert_eq!(header.after_render(&mut strip), 1);

        // index 9: 900 - 150 + 50
        assert_eq!(
            strip.scrolls,
            vec![ScrollRequest {
                left: 800.0,
                behavior: ScrollBehavior::Smooth
            }]
        );
        assert!(header.pending_effects().is_empty());
    }

    #[test]
    fn test_scroll_skipped_when_not_mounted() {
        let (mut header, _store) = mount();
        header.add_tab();

        let mut strip = FakeStrip::default();
        assert_eq!(header.after_render(&mut strip), 1);
        assert!(strip.scrolls.is_empty());
    }

    #[test]
    fn test_select_overflow_tab_does_not_scroll() {
        let (mut header, _store) = mount_with_tabs(22);
        open_dropdown(&mut header);

        assert!(header.select_tab(21));
        assert_eq!(header.active_tab(), 21);
        assert!(!header.is_dropdown_open());

        let mut strip = FakeStrip::with_tabs(20);
        header.after_render(&mut strip);
        assert!(strip.scrolls.is_empty());
    }

    #[test]
    fn test_select_unknown_tab_is_noop() {
        let (mut header, _store) = mount();
        assert!(!header.select_tab(42));
        assert_eq!(header.active_tab(), 1);
        assert!(header.pending_effects().is_empty());
    }

    #[test]
    fn test_never_removes_last_tab() {
        let (mut header, store) = mount();

        assert!(header.remove_tab(1));
        assert!(!header.remove_tab(2));
        assert_eq!(ids(&header), vec![2]);
        assert_eq!(header.active_tab(), 2);
        assert_eq!(store.get_item("activeTab").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_add_remove_sequence_keeps_invariants() {
        let (mut header, _store) = mount();

        for step in 0..60u64 {
            if step % 3 == 2 {
                let target = header.tabs()[(step as usize * 7) % header.tabs().len()].id;
                header.remove_tab(target);
            } else if step % 5 == 0 {
                let target = header.active_tab();
                header.remove_tab(target);
                header.remove_tab(header.tabs()[0].id);
            } else {
                header.add_tab();
            }

            assert!(!header.tabs().is_empty());
            assert!(header.tab_list().contains(header.active_tab()));
            let max = header.tabs().iter().map(|t| t.id).max().unwrap();
            assert!(header.next_id() > max);
        }
    }

    #[test]
    fn test_remove_active_moves_to_first() {
        let (mut header, _store) = mount_with_tabs(5);
        header.select_tab(4);
        header.effects.clear();

        assert!(header.remove_tab(4));
        assert_eq!(header.active_tab(), 1);
        assert_eq!(header.pending_effects(), vec![Effect::ScrollIntoView(1)]);
    }

    #[test]
    fn test_remove_inactive_keeps_active() {
        let (mut header, _store) = mount_with_tabs(5);
        header.select_tab(3);
        header.effects.clear();

        assert!(header.remove_tab(5));
        assert_eq!(header.active_tab(), 3);
        assert!(header.pending_effects().is_empty());
    }

    #[test]
    fn test_remove_visible_tab_ends_overflow() {
        let (mut header, _store) = mount_with_tabs(21);
        open_dropdown(&mut header);

        assert!(header.remove_tab(5));

        assert_eq!(header.tabs().len(), 20);
        assert!(!header.has_overflow());
        assert!(!header.is_dropdown_open());
        assert!(!header.is_dismiss_listener_attached());
        assert!(header.view().dropdown.is_none());
    }

    #[test]
    fn test_remove_overflow_tab_keeps_menu_open() {
        let (mut header, _store) = mount_with_tabs(23);
        open_dropdown(&mut header);

        assert!(header.remove_tab(22));

        assert!(header.is_dropdown_open());
        let view = header.view();
        assert_eq!(view.overflow_ids(), vec![21, 23]);
        let menu = view.dropdown.unwrap().menu.unwrap();
        assert_eq!(menu.key, "dropdown-22-21-23");
    }

    #[test]
    fn test_close_button_stops_propagation() {
        let (mut header, _store) = mount();
        let mut event = UiEvent::new();

        assert!(header.close_tab(2, &mut event));
        assert!(event.propagation_stopped());
        assert!(!event.default_prevented());
        assert_eq!(ids(&header), vec![1]);
    }

    #[test]
    fn test_toggle_dropdown() {
        let (mut header, _store) = mount();
        let mut event = UiEvent::new();

        // Nothing to show yet
        assert!(!header.toggle_dropdown(&mut event));
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
        assert!(!header.is_dropdown_open());

        let (mut header, _store) = mount_with_tabs(21);
        open_dropdown(&mut header);
        assert!(header.is_dismiss_listener_attached());

        assert!(header.toggle_dropdown(&mut UiEvent::new()));
        assert!(!header.is_dropdown_open());
        assert!(!header.is_dismiss_listener_attached());
    }

    #[test]
    fn test_outside_click_dismisses() {
        let (mut header, _store) = mount_with_tabs(21);
        open_dropdown(&mut header);

        header.pointer_down(PointerTarget::Dropdown);
        assert!(header.is_dropdown_open());

        header.pointer_down(PointerTarget::Outside);
        assert!(!header.is_dropdown_open());
        assert!(!header.is_dismiss_listener_attached());

        // Listener detached: further clicks change nothing
        header.pointer_down(PointerTarget::Outside);
        assert!(!header.is_dropdown_open());
    }

    #[test]
    fn test_rename_with_enter() {
        let (mut header, store) = mount();

        assert!(header.start_editing(2));
        assert!(header.handle_key(2, "New Title", EditKey::Enter));

        let tab = &header.tabs()[1];
        assert_eq!(tab.title, "New Title");
        assert!(!tab.is_editing);
        assert!(store
            .get_item("dynamicTabs")
            .unwrap()
            .unwrap()
            .contains(r#""title":"New Title""#));
    }

    #[test]
    fn test_whitespace_title_discarded() {
        let (mut header, _store) = mount();

        header.start_editing(1);
        assert!(header.blur_title_input(1, "   "));

        assert_eq!(header.tabs()[0].title, "Tab 1");
        assert!(!header.tabs()[0].is_editing);
    }

    #[test]
    fn test_escape_cancels_and_late_blur_is_ignored() {
        let (mut header, _store) = mount();

        header.start_editing(1);
        assert!(header.handle_key(1, "Draft", EditKey::Escape));
        assert!(!header.blur_title_input(1, "Draft"));

        assert_eq!(header.tabs()[0].title, "Tab 1");
        assert!(!header.tabs()[0].is_editing);
    }

    #[test]
    fn test_other_keys_leave_editor_open() {
        let (mut header, _store) = mount();

        header.start_editing(1);
        assert!(!header.handle_key(1, "Dra", "a".parse().unwrap()));
        assert!(header.tabs()[0].is_editing);
    }

    #[test]
    fn test_single_editor_and_focus() {
        let (mut header, _store) = mount();
        header.add_tab();
        header.effects.clear();

        header.start_editing(1);
        header.start_editing(3);

        let editing: Vec<TabId> = header
            .tabs()
            .iter()
            .filter(|t| t.is_editing)
            .map(|t| t.id)
            .collect();
        assert_eq!(editing, vec![3]);

        // Only the editor that is still open gets focus
        let mut strip = FakeStrip::with_tabs(3);
        assert_eq!(header.after_render(&mut strip), 2);
        assert_eq!(strip.focused, vec![3]);
    }

    #[test]
    fn test_view_tracks_state() {
        let (mut header, _store) = mount();
        header.start_editing(2);

        let view = header.view();
        assert_eq!(view.visible_ids(), vec![1, 2]);
        assert!(view.tabs[0].active);
        assert_eq!(view.tabs[1].edit_value.as_deref(), Some("Tab 2"));
        assert_eq!(view.content.heading, "Content for Tab 1");
    }

    #[test]
    fn test_custom_threshold() {
        let mut config = config();
        config.overflow_threshold = 3;

        let store = MemoryStore::new();
        let persistence = Persistence::new(Arc::new(store), &config);
        let mut header = TabHeader::mount(persistence, &config).unwrap();
        header.add_tab();
        header.add_tab();

        let split = header.partition();
        assert_eq!(split.visible.len(), 3);
        assert_eq!(split.overflow.len(), 1);
        assert!(header.has_overflow());
    }

    #[test]
    fn test_unmount_detaches_listener() {
        let (mut header, _store) = mount_with_tabs(21);
        open_dropdown(&mut header);
        header.add_tab();
        assert!(header.is_dismiss_listener_attached());
        assert_eq!(header.pending_effects(), vec![Effect::ScrollIntoView(22)]);

        header.unmount();

        assert!(!header.is_dropdown_open());
        assert!(!header.is_dismiss_listener_attached());
        assert!(header.pending_effects().is_empty());
        assert_eq!(header.tabs().len(), 22);

        let mut strip = FakeStrip::with_tabs(20);
        assert_eq!(header.after_render(&mut strip), 0);
        assert!(strip.scrolls.is_empty());
    }

    #[test]
    fn test_mount_rejects_exhausted_ids() {
        let store = MemoryStore::new();
        store
            .set_item(
                "dynamicTabs",
                r#"[{"id":18446744073709551615,"title":"Big","isEditing":false}]"#,
            )
            .unwrap();

        let persistence = Persistence::new(Arc::new(store), &config());
        let err = TabHeader::mount(persistence, &config()).unwrap_err();
        assert!(matches!(err, CoreError::Tab(TabError::IdExhausted)));
    }

    #[test]
    fn test_add_tab_stops_when_ids_run_out() {
        let store = MemoryStore::new();
        let last = u64::MAX - 1;
        store
            .set_item(
                "dynamicTabs",
                &format!(r#"[{{"id":{},"title":"Last","isEditing":false}}]"#, last),
            )
            .unwrap();

        let mut header = mount_with(&store);
        assert_eq!(header.add_tab(), None);
        assert_eq!(ids(&header), vec![last]);
        assert_eq!(header.active_tab(), last);
        assert!(header.pending_effects().is_empty());
    }
}
