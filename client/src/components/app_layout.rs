//! Authenticated shell: sidebar navigation, header, and page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation entries come from the router's role filter, so the sidebar
//! never links to a page the current role would be redirected away from.

use clubhub::routes;
use clubhub::views::avatar_url;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::session::SessionHandle;
use crate::state::ui::UiState;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let current_path = move || pathname.with(|p| routes::normalize_path(p).to_owned());
    let title = move || pathname.with(|p| routes::page_title(p));

    let nav_links = move || {
        let items = auth.get().role().map(routes::nav_items).unwrap_or_default();
        items
            .into_iter()
            .map(|item| {
                let path = item.route.path();
                view! {
                    <a
                        href=path
                        class="sidebar__link"
                        class:sidebar__link--active=move || current_path() == path
                        on:click=move |_| ui.update(UiState::close_sidebar)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    let on_logout = move |_| match session.logout() {
        Ok(()) => navigate("/", NavigateOptions::default()),
        Err(e) => leptos::logging::warn!("logout failed: {e}"),
    };

    view! {
        <div class="app-shell" class:app-shell--sidebar-open=move || ui.get().sidebar_open>
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <span class="sidebar__logo">"ICT"</span>
                    <span class="sidebar__title">"Club Portal"</span>
                </div>
                <nav class="sidebar__nav">{nav_links}</nav>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </aside>
            <div class="app-shell__main">
                <header class="app-header">
                    <button
                        class="btn btn--icon app-header__menu"
                        title="Toggle menu"
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                    >
                        "☰"
                    </button>
                    <h1 class="app-header__title">{title}</h1>
                    <span class="app-header__spacer"></span>
                    <ThemeToggle/>
                    {move || {
                        auth.get()
                            .user
                            .map(|user| {
                                view! {
                                    <a href="/profile" class="app-header__user">
                                        <img class="avatar avatar--sm" src=avatar_url(&user) alt=user.full_name.clone()/>
                                        <span class="app-header__user-name">{user.full_name.clone()}</span>
                                        <span class="role-badge">{user.role.as_str()}</span>
                                    </a>
                                }
                            })
                    }}
                </header>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
