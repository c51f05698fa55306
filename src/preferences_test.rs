use super::*;
use crate::storage::MemoryStore;

#[test]
fn load_without_stored_value_uses_default() {
    let store = ThemeStore::load(MemoryStore::new());
    assert_eq!(store.is_dark(), DEFAULT_DARK);
}

#[test]
fn load_reads_light_and_dark() {
    let storage = MemoryStore::new();
    storage.set_item(THEME_KEY, "light").unwrap();
    assert!(!ThemeStore::load(storage.clone()).is_dark());

    storage.set_item(THEME_KEY, "dark").unwrap();
    assert!(ThemeStore::load(storage).is_dark());
}

#[test]
fn load_ignores_unknown_values() {
    let storage = MemoryStore::new();
    storage.set_item(THEME_KEY, "sepia").unwrap();
    assert_eq!(ThemeStore::load(storage).is_dark(), DEFAULT_DARK);
}

#[test]
fn toggle_persists_across_reload() {
    let storage = MemoryStore::new();
    let mut store = ThemeStore::load(storage.clone());
    assert!(!store.toggle());
    assert_eq!(storage.get_item(THEME_KEY).as_deref(), Some("light"));

    let reloaded = ThemeStore::load(storage.clone());
    assert!(!reloaded.is_dark());

    let mut reloaded = reloaded;
    assert!(reloaded.toggle());
    assert!(ThemeStore::load(storage).is_dark());
}

#[test]
fn toggle_flips_in_memory_when_write_fails() {
    let storage = MemoryStore::new();
    let mut store = ThemeStore::load(storage.clone());
    storage.set_read_only(true);
    assert!(!store.toggle());
    assert!(!store.is_dark());
    assert_eq!(storage.get_item(THEME_KEY), None);
}

#[test]
fn theme_name_matches_parse() {
    assert_eq!(parse_theme(theme_name(true)), Some(true));
    assert_eq!(parse_theme(theme_name(false)), Some(false));
    assert_eq!(parse_theme(""), None);
}
