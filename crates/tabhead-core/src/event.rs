//! Input events delivered by the host

/// The slice of DOM event behaviour the widget relies on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Where a pointer-down landed, relative to the overflow dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the dropdown container (toggle button or menu)
    Dropdown,
    /// Anywhere else on the page
    Outside,
}
