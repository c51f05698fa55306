use super::*;

#[test]
fn ui_state_default_matches_theme_default() {
    let state = UiState::default();
    assert_eq!(state.dark_mode, clubhub::preferences::DEFAULT_DARK);
    assert!(!state.sidebar_open);
}

#[test]
fn toggle_sidebar_flips_and_close_resets() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);

    state.toggle_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open);
}
