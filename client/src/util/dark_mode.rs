//! Dark mode initialization and toggle.
//!
//! The persisted preference lives in the core `ThemeStore`; this module
//! mirrors it onto the `data-theme` attribute of the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! DOM updates are browser-only; non-`csr` builds no-op so tests stay
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use clubhub::preferences::ThemeStore;
#[cfg(feature = "csr")]
use clubhub::preferences::theme_name;
use clubhub::storage::KeyValueStore;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(enabled));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Apply the stored preference and return it.
pub fn init<S: KeyValueStore>(theme: &ThemeStore<S>) -> bool {
    let dark = theme.is_dark();
    apply(dark);
    dark
}

/// Flip and persist the theme, then update the DOM.
pub fn toggle<S: KeyValueStore>(theme: &mut ThemeStore<S>) -> bool {
    let next = theme.toggle();
    apply(next);
    next
}
