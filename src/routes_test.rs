use super::*;
use crate::fixtures;
use crate::model::UserProfile;

fn user_with(role: UserRole) -> UserProfile {
    let mut user = fixtures::users().remove(2);
    user.role = role;
    user
}

fn signed_in(role: UserRole) -> AuthState {
    AuthState::signed_in(user_with(role))
}

fn anonymous() -> AuthState {
    AuthState::default()
}

const PROTECTED: [Route; 5] = [Route::Dashboard, Route::Profile, Route::Events, Route::Projects, Route::Resources];

// =============================================================
// Path parsing
// =============================================================

#[test]
fn normalize_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize_path("/admin/"), "/admin");
    assert_eq!(normalize_path("/events?tab=2"), "/events");
    assert_eq!(normalize_path("/profile#skills"), "/profile");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("///"), "/");
}

#[test]
fn from_path_round_trips_every_route() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/settings"), None);
    assert_eq!(Route::from_path("/Admin"), None);
}

// =============================================================
// Transition table
// =============================================================

#[test]
fn loading_resolves_every_path_to_loading() {
    let pending = AuthState::pending();
    for path in ["/", "/auth", "/admin", "/nowhere"] {
        assert_eq!(resolve(path, &pending), Resolution::Loading);
    }
    assert_eq!(settle("/admin", &pending), None);
}

#[test]
fn guest_routes_render_without_session() {
    assert_eq!(resolve("/", &anonymous()), Resolution::Render(Route::Landing));
    assert_eq!(resolve("/auth", &anonymous()), Resolution::Render(Route::Auth));
}

#[test]
fn guest_routes_redirect_signed_in_users_to_dashboard() {
    for role in UserRole::ALL {
        assert_eq!(resolve("/", &signed_in(role)), Resolution::Redirect(Route::Dashboard));
        assert_eq!(resolve("/auth", &signed_in(role)), Resolution::Redirect(Route::Dashboard));
    }
}

#[test]
fn protected_routes_redirect_anonymous_to_auth() {
    for route in PROTECTED {
        assert_eq!(resolve(route.path(), &anonymous()), Resolution::Redirect(Route::Auth));
    }
}

#[test]
fn protected_routes_render_for_every_role() {
    for role in UserRole::ALL {
        for route in PROTECTED {
            assert_eq!(resolve(route.path(), &signed_in(role)), Resolution::Render(route));
        }
    }
}

#[test]
fn admin_route_renders_only_for_admins() {
    assert_eq!(resolve("/admin", &signed_in(UserRole::Admin)), Resolution::Render(Route::Admin));
    assert_eq!(resolve("/admin", &signed_in(UserRole::Board)), Resolution::Redirect(Route::Dashboard));
    assert_eq!(resolve("/admin", &signed_in(UserRole::Member)), Resolution::Redirect(Route::Dashboard));
    assert_eq!(resolve("/admin", &anonymous()), Resolution::Redirect(Route::Dashboard));
}

#[test]
fn unknown_paths_redirect_to_landing() {
    assert_eq!(resolve("/settings", &anonymous()), Resolution::Redirect(Route::Landing));
    assert_eq!(resolve("/settings", &signed_in(UserRole::Admin)), Resolution::Redirect(Route::Landing));
}

#[test]
fn every_role_and_path_renders_iff_permitted() {
    let mut states = vec![anonymous()];
    states.extend(UserRole::ALL.into_iter().map(signed_in));
    for auth in &states {
        for route in Route::ALL {
            let permitted = route.access().permits(auth.role());
            match resolve(route.path(), auth) {
                Resolution::Render(r) => {
                    assert!(permitted);
                    assert_eq!(r, route);
                }
                Resolution::Redirect(r) => {
                    assert!(!permitted);
                    assert_eq!(r, route.fallback());
                }
                Resolution::Loading => panic!("settled state resolved to loading"),
            }
        }
    }
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_follows_redirect_chains() {
    assert_eq!(settle("/admin", &anonymous()), Some(Route::Auth));
    assert_eq!(settle("/admin", &signed_in(UserRole::Member)), Some(Route::Dashboard));
    assert_eq!(settle("/nowhere", &signed_in(UserRole::Board)), Some(Route::Dashboard));
    assert_eq!(settle("/nowhere", &anonymous()), Some(Route::Landing));
}

#[test]
fn role_downgrade_redirects_on_next_resolution() {
    let mut auth = signed_in(UserRole::Admin);
    assert_eq!(resolve("/admin", &auth), Resolution::Render(Route::Admin));
    if let Some(user) = auth.user.as_mut() {
        user.role = UserRole::Member;
    }
    assert_eq!(resolve("/admin", &auth), Resolution::Redirect(Route::Dashboard));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_items_include_admin_panel_only_for_admins() {
    let admin: Vec<_> = nav_items(UserRole::Admin).into_iter().map(|i| i.label).collect();
    assert_eq!(admin, vec!["Dashboard", "Events", "Projects", "Resources", "Profile", "Admin Panel"]);

    for role in [UserRole::Board, UserRole::Member] {
        let labels: Vec<_> = nav_items(role).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Events", "Projects", "Resources", "Profile"]);
    }
}

#[test]
fn page_title_uses_nav_label_or_default() {
    assert_eq!(page_title("/admin"), "Admin Panel");
    assert_eq!(page_title("/events/"), "Events");
    assert_eq!(page_title("/"), DEFAULT_PAGE_TITLE);
    assert_eq!(page_title("/unknown"), DEFAULT_PAGE_TITLE);
}

#[test]
fn access_requires_session() {
    assert!(!Access::GuestOnly.requires_session());
    assert!(Access::Authenticated.requires_session());
    assert!(Route::Admin.access().requires_session());
}
