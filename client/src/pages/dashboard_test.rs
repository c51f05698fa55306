use clubhub::fixtures;

use super::*;

fn member() -> UserProfile {
    fixtures::users().into_iter().find(|u| u.id == "3").unwrap()
}

#[test]
fn summary_counts_fixture_collections() {
    let user = member();
    let summary = DashboardSummary::new(&user, &fixtures::events(), &fixtures::projects(), &fixtures::resources());
    assert_eq!(summary.events, fixtures::events().len());
    assert_eq!(summary.resources, fixtures::resources().len());
    assert_eq!(summary.my_projects, projects_for(&user, &fixtures::projects()).len());
}

#[test]
fn upcoming_sorts_by_date_and_limits() {
    let mut events = fixtures::events();
    events.reverse();
    let next = upcoming(&events, 1);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, "e1");
}

#[test]
fn upcoming_with_large_limit_keeps_everything() {
    let events = fixtures::events();
    assert_eq!(upcoming(&events, 10).len(), events.len());
}
