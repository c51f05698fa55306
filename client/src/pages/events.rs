//! Events page: fixture events with per-visit registration toggles.

use clubhub::fixtures;
use clubhub::views::{RegistrationSet, can_manage_events, split_event_date};
use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth();
    let registrations = RwSignal::new(RegistrationSet::default());
    let notice = RwSignal::new(String::new());

    let can_create = move || auth.get().role().is_some_and(can_manage_events);
    let on_create = move |_| notice.set("Event creation opens with the next club term.".to_owned());

    view! {
        <div class="events-page">
            <header class="section-header">
                <h2>"Club Events"</h2>
                <Show when=can_create>
                    <button class="btn btn--primary" on:click=on_create>"+ Create Event"</button>
                </Show>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="events-page__notice">{move || notice.get()}</p>
            </Show>
            <div class="events-page__grid">
                {fixtures::events()
                    .into_iter()
                    .map(|event| {
                        let (day, time) = split_event_date(&event.date);
                        let when = format!("{day} · {time}");
                        let stored = StoredValue::new(event.clone());
                        let is_registered =
                            move || stored.with_value(|e| registrations.with(|r| r.is_registered(&e.id)));
                        view! {
                            <article class="card event-card">
                                {event
                                    .image_url
                                    .clone()
                                    .map(|src| view! { <img class="event-card__image" src=src alt=""/> })}
                                <div class="event-card__body">
                                    <h3>{event.title.clone()}</h3>
                                    <p class="event-card__when">{when}</p>
                                    <p class="event-card__where">{event.location.clone()}</p>
                                    <p>{event.description.clone()}</p>
                                    <div class="event-card__footer">
                                        <span class="event-card__seats">
                                            {move || stored.with_value(|e| registrations.with(|r| r.seats_label(e)))}
                                        </span>
                                        <button
                                            class="btn"
                                            class:btn--primary=move || !is_registered()
                                            disabled=move || {
                                                !stored.with_value(|e| registrations.with(|r| r.has_capacity(e)))
                                            }
                                            on:click=move |_| {
                                                stored.with_value(|e| {
                                                    registrations.update(|r| {
                                                        r.toggle(&e.id);
                                                    });
                                                });
                                            }
                                        >
                                            {move || if is_registered() { "Registered ✓" } else { "Register" }}
                                        </button>
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
