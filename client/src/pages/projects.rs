//! Projects page: club projects plus the AI idea lab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The idea lab is the only place a member talks to the generative model
//! about projects. Without a configured key the form stays visible but
//! explains that AI is off.

use clubhub::assistant::ProjectIdea;
use clubhub::fixtures;
use clubhub::llm::LlmConfig;
use clubhub::views::project_lead;
use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let llm = expect_context::<Option<LlmConfig>>();
    let ai_enabled = llm.is_some();

    let topic = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let idea = RwSignal::new(None::<ProjectIdea>);
    let error = RwSignal::new(String::new());

    let users = session.directory_users();

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let topic_value = topic.get().trim().to_owned();
        if topic_value.is_empty() {
            error.set("Enter a topic first.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let config = llm.clone();
            leptos::task::spawn_local(async move {
                match crate::net::ai::suggest_project(config, topic_value).await {
                    Ok(result) => idea.set(Some(result)),
                    Err(msg) => error.set(msg),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&llm, topic_value);
            busy.set(false);
        }
    };

    view! {
        <div class="projects-page">
            <section class="card idea-lab">
                <h2>"AI Idea Lab"</h2>
                <p>"Describe a theme and get a project proposal with a suggested stack."</p>
                <Show when=move || !ai_enabled>
                    <p class="idea-lab__disabled">{crate::net::ai::AI_DISABLED_MESSAGE}</p>
                </Show>
                <form class="idea-lab__form" on:submit=on_generate>
                    <input
                        class="idea-lab__input"
                        type="text"
                        placeholder="e.g. sustainability, campus safety"
                        prop:value=move || topic.get()
                        on:input=move |ev| topic.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get() || !ai_enabled>
                        {move || if busy.get() { "Thinking..." } else { "Generate Idea" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="idea-lab__error">{move || error.get()}</p>
                </Show>
                {move || {
                    idea.get()
                        .map(|i| {
                            view! {
                                <article class="idea-lab__result">
                                    <h3>{i.title}</h3>
                                    <p>{i.description}</p>
                                    <ul class="chip-list">
                                        {i.tech_stack
                                            .into_iter()
                                            .map(|t| view! { <li class="chip">{t}</li> })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                }}
            </section>
            <section class="projects-page__grid">
                {fixtures::projects()
                    .into_iter()
                    .map(|project| {
                        let lead = project_lead(&project, &users).unwrap_or("Unassigned").to_owned();
                        let status_class = format!("status-badge status-badge--{}", project.status.label().to_lowercase().replace(' ', "-"));
                        view! {
                            <article class="card project-card">
                                <header class="project-card__header">
                                    <h3>{project.title.clone()}</h3>
                                    <span class=status_class>{project.status.label()}</span>
                                </header>
                                <p>{project.description.clone()}</p>
                                <ul class="chip-list">
                                    {project
                                        .tech_stack
                                        .iter()
                                        .map(|t| view! { <li class="chip">{t.clone()}</li> })
                                        .collect_view()}
                                </ul>
                                <footer class="project-card__footer">
                                    <span>"Lead: " {lead}</span>
                                    <span>{format!("{} members", project.members.len())}</span>
                                </footer>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
