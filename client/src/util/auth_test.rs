use clubhub::model::{UserProfile, UserRole};

use super::*;

fn signed_in(role: UserRole) -> AuthState {
    AuthState::signed_in(UserProfile {
        id: "u1".to_owned(),
        email: "u1@club.org".to_owned(),
        full_name: "Alice Moss".to_owned(),
        role,
        avatar_url: None,
        bio: None,
        skills: Vec::new(),
        joined_at: "2024-01-01".to_owned(),
    })
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(redirect_target(Route::Admin, &AuthState::pending()), None);
}

#[test]
fn anonymous_visitor_is_sent_to_sign_in() {
    let state = AuthState::default();
    assert_eq!(redirect_target(Route::Profile, &state), Some("/auth"));
    assert_eq!(redirect_target(Route::Landing, &state), None);
}

#[test]
fn member_is_sent_from_admin_to_dashboard() {
    assert_eq!(redirect_target(Route::Admin, &signed_in(UserRole::Member)), Some("/dashboard"));
    assert_eq!(redirect_target(Route::Admin, &signed_in(UserRole::Admin)), None);
}

#[test]
fn signed_in_user_skips_sign_in_page() {
    assert_eq!(redirect_target(Route::Auth, &signed_in(UserRole::Board)), Some("/dashboard"));
}
