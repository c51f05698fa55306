//! Shared route guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page applies the same access check, so the redirect decision
//! lives here instead of in each page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use clubhub::model::AuthState;
use clubhub::routes::{self, Resolution, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Path to navigate to when `route` may not render for `state`.
pub fn redirect_target(route: Route, state: &AuthState) -> Option<&'static str> {
    match routes::resolve_route(route, state) {
        Resolution::Redirect(target) => Some(target.path()),
        Resolution::Loading | Resolution::Render(_) => None,
    }
}

/// Navigate away whenever the session no longer permits `route`.
///
/// Re-evaluates on every `AuthState` change, so a logout or role downgrade
/// while the page is open redirects immediately.
pub fn install_route_guard<F>(route: Route, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(route, &auth.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
