//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root. It owns the session handle, the theme
//! store, and the optional AI config, provides them as context, and starts
//! the one-shot rehydration timer. Every route is wrapped in a [`Guarded`]
//! boundary that re-runs the role check on each navigation and on each
//! session change.

use clubhub::llm::LlmConfig;
use clubhub::model::AuthState;
use clubhub::preferences::ThemeStore;
use clubhub::routes::{self, Resolution, Route as Page};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::components::splash::Splash;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, events::EventsPage, landing::LandingPage, login::LoginPage,
    profile::ProfilePage, projects::ProjectsPage, resources::ResourcesPage,
};
use crate::state::session::SessionHandle;
use crate::state::ui::UiState;
use crate::util::auth::install_route_guard;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// Simulated latency before the stored session is restored.
pub const REHYDRATE_DELAY_MS: u64 = 500;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let session = SessionHandle::new(auth);
    let ui = RwSignal::new(UiState::default());
    let theme = StoredValue::new(ThemeStore::load(BrowserStorage));
    let dark = theme.with_value(dark_mode::init);
    ui.update(|u| u.dark_mode = dark);

    let llm = match LlmConfig::from_build_env() {
        Ok(config) => Some(config),
        Err(e) => {
            leptos::logging::log!("AI features disabled: {e}");
            None
        }
    };

    provide_context(session);
    provide_context(auth);
    provide_context(ui);
    provide_context(theme);
    provide_context(llm);

    schedule_rehydrate(session);

    view! {
        <Title text="ICT Club Portal"/>

        <Router>
            <Routes fallback=|| view! { <UnknownPath/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded page=Page::Landing><LandingPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("auth")
                    view=|| view! { <Guarded page=Page::Auth><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded page=Page::Dashboard><AppLayout><DashboardPage/></AppLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Guarded page=Page::Profile><AppLayout><ProfilePage/></AppLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("events")
                    view=|| view! { <Guarded page=Page::Events><AppLayout><EventsPage/></AppLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("projects")
                    view=|| view! { <Guarded page=Page::Projects><AppLayout><ProjectsPage/></AppLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("resources")
                    view=|| view! { <Guarded page=Page::Resources><AppLayout><ResourcesPage/></AppLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Guarded page=Page::Admin><AppLayout><AdminPage/></AppLayout></Guarded> }
                />
            </Routes>
        </Router>
    }
}

fn schedule_rehydrate(session: SessionHandle) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(REHYDRATE_DELAY_MS)).await;
        session.restore();
    });
    #[cfg(not(feature = "csr"))]
    session.restore();
}

/// Renders `children` only while the session permits `page`.
#[component]
fn Guarded(page: Page, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(page, auth, use_navigate());

    let resolution = Memo::new(move |_| routes::resolve_route(page, &auth.get()));

    view! {
        <Show
            when=move || resolution.get() == Resolution::Render(page)
            fallback=move || {
                view! {
                    <Show when=move || resolution.get() == Resolution::Loading>
                        <Splash/>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Any path outside the route table goes back to the landing page.
#[component]
fn UnknownPath() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let path = pathname.get();
        // Known routes reach here only in a non-canonical form (`/events/`).
        let target = match routes::resolve(&path, &auth.get()) {
            Resolution::Loading => return,
            Resolution::Render(page) | Resolution::Redirect(page) => page.path(),
        };
        if target != path {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || auth.get().loading>
            <Splash/>
        </Show>
    }
}
