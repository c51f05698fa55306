//! Dashboard: greeting, summary counts, and the next events.
//!
//! SYSTEM CONTEXT
//! ==============
//! First page after sign-in. Everything shown derives from the session user
//! and the club fixtures.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use clubhub::fixtures;
use clubhub::model::{ClubEvent, Project, Resource, UserProfile};
use clubhub::views::{can_manage_events, first_name, projects_for, split_event_date};
use leptos::prelude::*;

use crate::state::session::SessionHandle;

/// Events listed in the "upcoming" panel.
const UPCOMING_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DashboardSummary {
    events: usize,
    my_projects: usize,
    resources: usize,
}

impl DashboardSummary {
    fn new(user: &UserProfile, events: &[ClubEvent], projects: &[Project], resources: &[Resource]) -> Self {
        Self { events: events.len(), my_projects: projects_for(user, projects).len(), resources: resources.len() }
    }
}

/// Soonest events first. ISO timestamps sort lexically.
fn upcoming(events: &[ClubEvent], limit: usize) -> Vec<ClubEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth();

    let events = fixtures::events();
    let projects = fixtures::projects();
    let resources = fixtures::resources();
    let next_events = upcoming(&events, UPCOMING_LIMIT);

    let summary = move || {
        auth.get()
            .user
            .map(|user| DashboardSummary::new(&user, &events, &projects, &resources))
    };
    let greeting = move || auth.get().user.map(|u| format!("Welcome back, {}!", first_name(&u))).unwrap_or_default();
    let can_create = move || auth.get().role().is_some_and(can_manage_events);

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__hero">
                <h2>{greeting}</h2>
                <p>"Here is what is happening in the club."</p>
            </section>
            {move || {
                summary()
                    .map(|s| {
                        view! {
                            <section class="dashboard-page__stats">
                                <div class="card stat-card">
                                    <span class="stat-card__value">{s.events}</span>
                                    <span class="stat-card__label">"Events"</span>
                                </div>
                                <div class="card stat-card">
                                    <span class="stat-card__value">{s.my_projects}</span>
                                    <span class="stat-card__label">"My Projects"</span>
                                </div>
                                <div class="card stat-card">
                                    <span class="stat-card__value">{s.resources}</span>
                                    <span class="stat-card__label">"Resources"</span>
                                </div>
                            </section>
                        }
                    })
            }}
            <section class="dashboard-page__upcoming">
                <header class="section-header">
                    <h3>"Upcoming Events"</h3>
                    <a href="/events" class="btn btn--link">"View all"</a>
                </header>
                <ul class="event-list">
                    {next_events
                        .into_iter()
                        .map(|event| {
                            let (day, time) = split_event_date(&event.date);
                            let when = format!("{day} {time}");
                            view! {
                                <li class="event-list__item">
                                    <span class="event-list__title">{event.title.clone()}</span>
                                    <span class="event-list__when">{when}</span>
                                    <span class="event-list__where">{event.location.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <Show when=can_create>
                <section class="dashboard-page__board-tools card">
                    <h3>"Board Tools"</h3>
                    <p>"You can organize events for the club."</p>
                    <a href="/events" class="btn btn--primary">"Manage Events"</a>
                </section>
            </Show>
        </div>
    }
}
