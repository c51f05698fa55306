//! Theme preference persisted across sessions.
//!
//! The stored value is read once by [`ThemeStore::load`]; later reads come
//! from memory. Persistence is best-effort: a rejected write is logged and
//! the in-memory toggle still takes effect.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use tracing::{debug, warn};

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const DEFAULT_DARK: bool = true;

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Decode a stored theme value. Unknown values yield `None`.
#[must_use]
pub fn parse_theme(raw: &str) -> Option<bool> {
    match raw.trim() {
        DARK => Some(true),
        LIGHT => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { DARK } else { LIGHT }
}

/// Dark/light display preference.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    storage: S,
    dark: bool,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the persisted preference, falling back to [`DEFAULT_DARK`].
    pub fn load(storage: S) -> Self {
        let dark = match storage.get_item(THEME_KEY) {
            Some(raw) => parse_theme(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring unknown stored theme");
                DEFAULT_DARK
            }),
            None => DEFAULT_DARK,
        };
        debug!(theme = theme_name(dark), "theme loaded");
        Self { storage, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the preference, persist it, and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        if let Err(e) = self.storage.set_item(THEME_KEY, theme_name(self.dark)) {
            warn!(error = %e, "failed to persist theme");
        }
        self.dark
    }
}
