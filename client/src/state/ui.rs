//! Local UI chrome state (theme flag, mobile sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so layout
//! controls can evolve independently of identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the shell layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: clubhub::preferences::DEFAULT_DARK, sidebar_open: false }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Collapse the mobile sidebar after a navigation.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
