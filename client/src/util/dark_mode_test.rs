#![cfg(not(feature = "csr"))]

use clubhub::preferences::{THEME_KEY, ThemeStore, theme_name};
use clubhub::storage::{KeyValueStore, MemoryStore};

use super::*;

#[test]
fn init_reports_stored_preference() {
    let storage = MemoryStore::new();
    storage.set_item(THEME_KEY, "light").unwrap();
    let theme = ThemeStore::load(storage);
    assert!(!init(&theme));
}

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStore::new();
    let mut theme = ThemeStore::load(storage.clone());
    let before = theme.is_dark();

    let after = toggle(&mut theme);
    assert_eq!(after, !before);
    assert_eq!(storage.get_item(THEME_KEY).as_deref(), Some(theme_name(after)));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
