use clubhub::fixtures;

use super::*;

#[test]
fn change_role_applies_known_role() {
    let mut directory = UserDirectory::from_fixtures();
    assert!(change_role(&mut directory, "3", "board"));
    assert_eq!(directory.find_by_id("3").map(|u| u.role), Some(UserRole::Board));
}

#[test]
fn change_role_ignores_unknown_role_or_user() {
    let mut directory = UserDirectory::from_fixtures();
    assert!(!change_role(&mut directory, "3", "superuser"));
    assert!(!change_role(&mut directory, "missing", "admin"));
    assert_eq!(directory.find_by_id("3").map(|u| u.role), Some(UserRole::Member));
}

#[test]
fn deactivate_prompt_names_the_member() {
    let user = fixtures::users().into_iter().next().unwrap();
    let prompt = deactivate_prompt(&user);
    assert!(prompt.contains(&user.full_name));
    assert!(prompt.contains(&user.email));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_confirmation_is_declined_outside_the_browser() {
    let mut directory = UserDirectory::from_fixtures();
    let before = directory.len();
    let removed = directory.deactivate("3", |user| dialog::confirm(&deactivate_prompt(user)));
    assert!(removed.is_none());
    assert_eq!(directory.len(), before);
}
