use super::*;
use crate::fixtures;

fn member() -> UserProfile {
    fixtures::users().remove(2)
}

// =============================================================
// Avatars and greetings
// =============================================================

#[test]
fn avatar_url_prefers_profile_avatar() {
    assert_eq!(avatar_url(&member()), "https://picsum.photos/seed/jordan/200");
}

#[test]
fn avatar_url_generates_encoded_fallback() {
    let mut user = member();
    user.avatar_url = None;
    assert_eq!(avatar_url(&user), "https://ui-avatars.com/api/?name=Jordan%20Smith");

    user.avatar_url = Some("  ".to_owned());
    assert!(avatar_url(&user).starts_with("https://ui-avatars.com/"));
}

#[test]
fn first_name_takes_leading_word() {
    assert_eq!(first_name(&member()), "Jordan");
}

#[test]
fn only_board_and_admin_manage_events() {
    assert!(can_manage_events(UserRole::Admin));
    assert!(can_manage_events(UserRole::Board));
    assert!(!can_manage_events(UserRole::Member));
}

// =============================================================
// ProfileDraft
// =============================================================

#[test]
fn draft_starts_from_profile() {
    let draft = ProfileDraft::from_profile(&member());
    assert_eq!(draft.bio, "Freshman looking to learn web development.");
    assert_eq!(draft.skills, vec!["HTML", "CSS", "Python"]);
}

#[test]
fn draft_add_skill_trims_and_rejects_duplicates() {
    let mut draft = ProfileDraft::from_profile(&member());
    assert!(draft.add_skill("  Rust "));
    assert!(!draft.add_skill("Rust"));
    assert!(!draft.add_skill("   "));
    assert_eq!(draft.skills.last().map(String::as_str), Some("Rust"));
}

#[test]
fn draft_remove_skill_and_convert_to_update() {
    let mut draft = ProfileDraft::from_profile(&member());
    draft.remove_skill("CSS");
    draft.bio = "Updated".to_owned();
    let update = draft.into_update();
    assert_eq!(update.bio.as_deref(), Some("Updated"));
    assert_eq!(update.skills, Some(vec!["HTML".to_owned(), "Python".to_owned()]));
    assert_eq!(update.role, None);
}

// =============================================================
// RegistrationSet
// =============================================================

#[test]
fn registration_toggle_updates_seats_label() {
    let event = fixtures::events().remove(0);
    let mut regs = RegistrationSet::default();
    assert_eq!(regs.seats_label(&event), "45 / 60");

    assert!(regs.toggle(&event.id));
    assert_eq!(regs.seats_label(&event), "46 / 60");

    assert!(!regs.toggle(&event.id));
    assert_eq!(regs.attendees(&event), 45);
}

#[test]
fn seats_label_without_cap() {
    let mut event = fixtures::events().remove(1);
    event.max_attendees = None;
    assert_eq!(RegistrationSet::default().seats_label(&event), "12 registered");
}

#[test]
fn full_events_have_no_capacity_unless_registered() {
    let mut event = fixtures::events().remove(0);
    event.attendee_count = 60;
    let mut regs = RegistrationSet::default();
    assert!(!regs.has_capacity(&event));
    regs.toggle(&event.id);
    assert!(regs.has_capacity(&event));
}

#[test]
fn split_event_date_separates_day_and_time() {
    assert_eq!(split_event_date("2024-11-20T14:00:00"), ("2024-11-20", "14:00"));
    assert_eq!(split_event_date("2024-11-20"), ("2024-11-20", ""));
}

// =============================================================
// Projects
// =============================================================

#[test]
fn project_lead_resolves_name() {
    let users = fixtures::users();
    let projects = fixtures::projects();
    assert_eq!(project_lead(&projects[1], &users), Some("Sarah Chen"));
}

#[test]
fn projects_for_includes_membership_and_leadership() {
    let projects = fixtures::projects();
    let member_projects = projects_for(&member(), &projects);
    assert_eq!(member_projects.len(), 1);
    assert_eq!(member_projects[0].id, "p1");

    let sarah = fixtures::users().remove(1);
    assert_eq!(projects_for(&sarah, &projects).len(), 2);
}

#[test]
fn attendees_saturate_at_counter_limit() {
    let mut event = fixtures::events().remove(1);
    event.attendee_count = u32::MAX;
    event.max_attendees = None;
    let mut regs = RegistrationSet::default();
    regs.toggle(&event.id);
    assert_eq!(regs.attendees(&event), u32::MAX);
    assert_eq!(regs.seats_label(&event), format!("{} registered", u32::MAX));
}
