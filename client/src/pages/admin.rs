//! Admin panel: member search, role statistics, role changes, deactivation.
//!
//! DESIGN
//! ======
//! The page works on its own copy of the directory. Role changes and
//! removals made here are visible only on this page and never reach the
//! session store, so the signed-in identity cannot be rewritten from under
//! the router.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use clubhub::directory::UserDirectory;
use clubhub::model::{UserProfile, UserRole};
use clubhub::views::avatar_url;
use leptos::prelude::*;

use crate::state::session::SessionHandle;
use crate::util::dialog;

/// Apply a role picked from the select box. Unknown values are ignored.
fn change_role(directory: &mut UserDirectory, id: &str, raw_role: &str) -> bool {
    UserRole::parse(raw_role).is_some_and(|role| directory.set_role(id, role))
}

fn deactivate_prompt(user: &UserProfile) -> String {
    format!("Deactivate {} ({})? This cannot be undone.", user.full_name, user.email)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let directory = RwSignal::new(UserDirectory::new(session.directory_users()));
    let query = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let stats = move || directory.with(UserDirectory::stats);

    let on_role_change = move |id: String, raw: String| {
        let mut changed = false;
        directory.update(|d| changed = change_role(d, &id, &raw));
        if changed {
            notice.set(format!("Role updated to {raw}."));
        }
    };

    let on_deactivate = move |id: String| {
        let mut removed = None;
        directory.update(|d| removed = d.deactivate(&id, |user| dialog::confirm(&deactivate_prompt(user))));
        if let Some(user) = removed {
            notice.set(format!("{} was deactivated.", user.full_name));
        }
    };

    let rows = move || {
        let q = query.get();
        directory.with(|d| {
            d.filter(&q)
                .into_iter()
                .cloned()
                .map(|user| {
                    let role_id = user.id.clone();
                    let remove_id = user.id.clone();
                    view! {
                        <tr>
                            <td class="admin-table__member">
                                <img class="avatar avatar--sm" src=avatar_url(&user) alt=""/>
                                <span>{user.full_name.clone()}</span>
                            </td>
                            <td>{user.email.clone()}</td>
                            <td>
                                <select
                                    class="admin-table__role"
                                    on:change=move |ev| on_role_change(role_id.clone(), event_target_value(&ev))
                                >
                                    {UserRole::ALL
                                        .into_iter()
                                        .map(|role| {
                                            view! {
                                                <option value=role.as_str() selected=role == user.role>
                                                    {role.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </td>
                            <td>{user.joined_at.clone()}</td>
                            <td>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| on_deactivate(remove_id.clone())
                                >
                                    "Deactivate"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="admin-page">
            <section class="admin-page__stats">
                <div class="card stat-card">
                    <span class="stat-card__value">{move || stats().total}</span>
                    <span class="stat-card__label">"Total Members"</span>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__value">{move || stats().admins}</span>
                    <span class="stat-card__label">"Admins"</span>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__value">{move || stats().board}</span>
                    <span class="stat-card__label">"Board"</span>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__value">{move || stats().members}</span>
                    <span class="stat-card__label">"Members"</span>
                </div>
            </section>
            <section class="card admin-page__directory">
                <header class="section-header">
                    <h2>"Member Directory"</h2>
                    <input
                        class="admin-page__search"
                        type="search"
                        placeholder="Search by name or email"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </header>
                <Show when=move || !notice.get().is_empty()>
                    <p class="admin-page__notice">{move || notice.get()}</p>
                </Show>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Member"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Joined"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        </div>
    }
}
