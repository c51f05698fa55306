use leptos::prelude::*;

/// Full-screen placeholder shown while the session rehydrates.
#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash__spinner" aria-hidden="true"></div>
            <p class="splash__label">"Initializing Core System..."</p>
        </div>
    }
}
