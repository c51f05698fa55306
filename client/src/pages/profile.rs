//! Profile page with an edit mode for bio and skills.
//!
//! Edits accumulate in a `ProfileDraft`; saving merges it through the
//! session handle, cancelling discards it.

use clubhub::views::{ProfileDraft, avatar_url};
use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.auth();

    let draft = RwSignal::new(None::<ProfileDraft>);
    let new_skill = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_edit = move |_| {
        if let Some(user) = auth.get_untracked().user {
            draft.set(Some(ProfileDraft::from_profile(&user)));
            info.set(String::new());
        }
    };
    let on_cancel = move |_| {
        draft.set(None);
        new_skill.set(String::new());
    };
    let on_save = move |_| {
        let Some(pending) = draft.get_untracked() else {
            return;
        };
        match session.update_profile(pending.into_update()) {
            Ok(_) => {
                draft.set(None);
                info.set("Profile saved.".to_owned());
            }
            Err(e) => info.set(format!("Could not save profile: {e}")),
        }
    };
    let on_add_skill = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = new_skill.get_untracked();
        let mut added = false;
        draft.update(|d| {
            if let Some(d) = d {
                added = d.add_skill(&raw);
            }
        });
        if added {
            new_skill.set(String::new());
        }
    };

    let editing = move || draft.with(Option::is_some);

    view! {
        {move || {
            auth.get()
                .user
                .map(|user| {
                    let joined = user.joined_year().map(|y| format!("Member since {y}")).unwrap_or_default();
                    let bio = user.bio.clone().unwrap_or_else(|| "No bio yet.".to_owned());
                    let skills = user.skills.clone();
                    view! {
                        <section class="card profile-card">
                            <img class="avatar avatar--lg" src=avatar_url(&user) alt=user.full_name.clone()/>
                            <div class="profile-card__identity">
                                <h2>{user.full_name.clone()}</h2>
                                <p class="profile-card__email">{user.email.clone()}</p>
                                <span class="role-badge">{user.role.as_str()}</span>
                                <p class="profile-card__joined">{joined}</p>
                            </div>
                            <Show when=move || !editing()>
                                <button class="btn" on:click=on_edit>"Edit Profile"</button>
                            </Show>
                        </section>
                        <Show when=move || !editing()>
                            <section class="card profile-section">
                                <h3>"About"</h3>
                                <p>{bio.clone()}</p>
                                <h3>"Skills"</h3>
                                <ul class="chip-list">
                                    {skills
                                        .iter()
                                        .map(|s| view! { <li class="chip">{s.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </section>
                        </Show>
                    }
                })
        }}
        <Show when=editing>
            <section class="card profile-section profile-section--editing">
                <h3>"About"</h3>
                <textarea
                    class="profile-bio-input"
                    rows="4"
                    prop:value=move || draft.with(|d| d.as_ref().map(|d| d.bio.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(d) = d {
                                d.bio = value;
                            }
                        });
                    }
                ></textarea>
                <h3>"Skills"</h3>
                <ul class="chip-list">
                    {move || {
                        draft
                            .with(|d| d.as_ref().map(|d| d.skills.clone()).unwrap_or_default())
                            .into_iter()
                            .map(|skill| {
                                let target = skill.clone();
                                view! {
                                    <li class="chip">
                                        {skill}
                                        <button
                                            class="chip__remove"
                                            type="button"
                                            title="Remove skill"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    if let Some(d) = d {
                                                        d.remove_skill(&target);
                                                    }
                                                });
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <form class="skill-form" on:submit=on_add_skill>
                    <input
                        class="skill-input"
                        type="text"
                        placeholder="Add a skill"
                        prop:value=move || new_skill.get()
                        on:input=move |ev| new_skill.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Add"</button>
                </form>
                <div class="profile-actions">
                    <button class="btn" on:click=on_cancel>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_save>"Save Changes"</button>
                </div>
            </section>
        </Show>
        <Show when=move || !info.get().is_empty()>
            <p class="profile-message">{move || info.get()}</p>
        </Show>
    }
}
