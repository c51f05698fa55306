//! Role-gated router: path → view resolution and navigation menus.
//!
//! DESIGN
//! ======
//! Every [`Route`] declares an [`Access`] requirement and a fallback target.
//! [`resolve`] evaluates the requirement against the current [`AuthState`]
//! uniformly, so views never branch on roles to decide whether they may
//! render. The client re-runs resolution on every navigation and on every
//! session change, which is what turns a role downgrade on `/admin` into a
//! redirect.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::model::{AuthState, UserRole};

/// Maximum redirect hops followed by [`settle`].
const MAX_REDIRECTS: usize = 4;

/// Label shown in the page header when no nav item matches.
pub const DEFAULT_PAGE_TITLE: &str = "Core System";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Only visitors without a session (landing, sign-in).
    GuestOnly,
    /// Any signed-in member.
    Authenticated,
    /// Signed-in members whose role is in the set.
    Roles(&'static [UserRole]),
}

impl Access {
    /// Whether a visitor with `role` (`None` = anonymous) passes.
    #[must_use]
    pub fn permits(self, role: Option<UserRole>) -> bool {
        match self {
            Self::GuestOnly => role.is_none(),
            Self::Authenticated => role.is_some(),
            Self::Roles(allowed) => role.is_some_and(|r| allowed.contains(&r)),
        }
    }

    #[must_use]
    pub fn requires_session(self) -> bool {
        !matches!(self, Self::GuestOnly)
    }
}

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// Every view the application can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Auth,
    Dashboard,
    Profile,
    Events,
    Projects,
    Resources,
    Admin,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Landing,
        Route::Auth,
        Route::Dashboard,
        Route::Profile,
        Route::Events,
        Route::Projects,
        Route::Resources,
        Route::Admin,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::Events => "/events",
            Self::Projects => "/projects",
            Self::Resources => "/resources",
            Self::Admin => "/admin",
        }
    }

    /// Match a path after [`normalize_path`]. Unknown paths yield `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Landing | Self::Auth => Access::GuestOnly,
            Self::Dashboard | Self::Profile | Self::Events | Self::Projects | Self::Resources => {
                Access::Authenticated
            }
            Self::Admin => Access::Roles(ADMIN_ONLY),
        }
    }

    /// Where a visitor who fails [`Self::access`] is sent.
    #[must_use]
    pub fn fallback(self) -> Route {
        match self {
            Self::Landing | Self::Auth | Self::Admin => Self::Dashboard,
            Self::Dashboard | Self::Profile | Self::Events | Self::Projects | Self::Resources => Self::Auth,
        }
    }

    /// Sidebar label for routes that appear in the navigation menu.
    #[must_use]
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Landing | Self::Auth => None,
            Self::Dashboard => Some("Dashboard"),
            Self::Events => Some("Events"),
            Self::Projects => Some("Projects"),
            Self::Resources => Some("Resources"),
            Self::Profile => Some("Profile"),
            Self::Admin => Some("Admin Panel"),
        }
    }
}

/// Outcome of evaluating a path against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Session rehydration has not finished; show the splash screen.
    Loading,
    /// Render this route.
    Render(Route),
    /// Navigate to this route instead.
    Redirect(Route),
}

/// Strip query/fragment and trailing slashes; empty becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Evaluate a known route against the session.
#[must_use]
pub fn resolve_route(route: Route, auth: &AuthState) -> Resolution {
    if auth.loading {
        return Resolution::Loading;
    }
    if route.access().permits(auth.role()) {
        Resolution::Render(route)
    } else {
        Resolution::Redirect(route.fallback())
    }
}

/// Evaluate a raw path. Unknown paths redirect to the landing page.
#[must_use]
pub fn resolve(path: &str, auth: &AuthState) -> Resolution {
    if auth.loading {
        return Resolution::Loading;
    }
    match Route::from_path(path) {
        Some(route) => resolve_route(route, auth),
        None => Resolution::Redirect(Route::Landing),
    }
}

/// Follow redirects from `path` to the route that finally renders.
///
/// Returns `None` while loading or if the redirect chain does not settle.
#[must_use]
pub fn settle(path: &str, auth: &AuthState) -> Option<Route> {
    let mut resolution = resolve(path, auth);
    for _ in 0..MAX_REDIRECTS {
        match resolution {
            Resolution::Loading => return None,
            Resolution::Render(route) => return Some(route),
            Resolution::Redirect(next) => resolution = resolve_route(next, auth),
        }
    }
    None
}

/// A sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar order. Filtered per role by [`nav_items`].
const NAV_ORDER: [Route; 6] =
    [Route::Dashboard, Route::Events, Route::Projects, Route::Resources, Route::Profile, Route::Admin];

/// Navigation entries visible to `role`.
#[must_use]
pub fn nav_items(role: UserRole) -> Vec<NavItem> {
    NAV_ORDER
        .into_iter()
        .filter(|route| route.access().permits(Some(role)))
        .filter_map(|route| route.nav_label().map(|label| NavItem { label, route }))
        .collect()
}

/// Header title for `path`.
#[must_use]
pub fn page_title(path: &str) -> &'static str {
    Route::from_path(path)
        .and_then(Route::nav_label)
        .unwrap_or(DEFAULT_PAGE_TITLE)
}
