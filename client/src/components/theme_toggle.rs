//! Dark/light toggle button.

use clubhub::preferences::ThemeStore;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme = expect_context::<StoredValue<ThemeStore<BrowserStorage>>>();

    let on_toggle = move |_| {
        if let Some(next) = theme.try_update_value(crate::util::dark_mode::toggle) {
            ui.update(|u| u.dark_mode = next);
        }
    };

    view! {
        <button class="btn btn--icon theme-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
