//! Resources page: shared learning material with on-demand AI summaries.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::collections::HashMap;

use clubhub::fixtures;
use clubhub::llm::LlmConfig;
use clubhub::model::Resource;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[cfg(feature = "csr")]
use crate::util::markdown::render_markdown_html;

/// Summary state for one resource card.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Summary {
    Pending,
    /// Rendered HTML.
    Ready(String),
    Failed(String),
}

/// Distinct categories in first-seen order.
fn categories(resources: &[Resource]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in resources {
        if !out.contains(&r.category) {
            out.push(r.category.clone());
        }
    }
    out
}

fn in_category(resource: &Resource, category: Option<&str>) -> bool {
    category.is_none_or(|c| resource.category == c)
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let llm = expect_context::<Option<LlmConfig>>();
    let ai_enabled = llm.is_some();

    let resources = StoredValue::new(fixtures::resources());
    let category = RwSignal::new(None::<String>);
    let summaries = RwSignal::new(HashMap::<String, Summary>::new());

    let request_summary = move |resource: Resource| {
        if summaries.with_untracked(|s| s.get(&resource.id) == Some(&Summary::Pending)) {
            return;
        }
        summaries.update(|s| {
            s.insert(resource.id.clone(), Summary::Pending);
        });

        #[cfg(feature = "csr")]
        {
            let config = llm.clone();
            leptos::task::spawn_local(async move {
                let next = match crate::net::ai::summarize(config, resource.description).await {
                    Ok(text) => Summary::Ready(render_markdown_html(&text)),
                    Err(msg) => Summary::Failed(msg),
                };
                summaries.update(|s| {
                    s.insert(resource.id, next);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &llm;
            summaries.update(|s| {
                s.insert(resource.id, Summary::Failed(crate::net::ai::AI_DISABLED_MESSAGE.to_owned()));
            });
        }
    };

    let category_chips = move || {
        resources.with_value(|all| {
            categories(all)
                .into_iter()
                .map(|c| {
                    let label = c.clone();
                    let active = c.clone();
                    view! {
                        <button
                            class="chip chip--filter"
                            class:chip--active=move || category.get().as_deref() == Some(active.as_str())
                            on:click=move |_| category.set(Some(c.clone()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let cards = move || {
        let selected = category.get();
        resources
            .get_value()
            .into_iter()
            .filter(|r| in_category(r, selected.as_deref()))
            .map(|resource| {
                let id = resource.id.clone();
                let summary = move || summaries.with(|s| s.get(&id).cloned());
                let request = request_summary.clone();
                let target = resource.clone();
                view! {
                    <article class="card resource-card">
                        <header class="resource-card__header">
                            <span class="resource-card__type">{resource.file_type.label()}</span>
                            <span class="resource-card__category">{resource.category.clone()}</span>
                        </header>
                        <h3>{resource.title.clone()}</h3>
                        <p>{resource.description.clone()}</p>
                        <footer class="resource-card__footer">
                            <a class="btn" href=resource.file_url.clone() target="_blank" rel="noopener">
                                "Open"
                            </a>
                            <button
                                class="btn btn--primary"
                                disabled=move || !ai_enabled
                                on:click=move |_| request(target.clone())
                            >
                                "AI Summary"
                            </button>
                        </footer>
                        {move || {
                            summary()
                                .map(|s| match s {
                                    Summary::Pending => {
                                        view! { <p class="resource-card__summary">"Summarizing..."</p> }.into_any()
                                    }
                                    Summary::Ready(html) => {
                                        view! { <div class="resource-card__summary markdown-body" inner_html=html></div> }
                                            .into_any()
                                    }
                                    Summary::Failed(msg) => {
                                        view! { <p class="resource-card__summary resource-card__summary--error">{msg}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <div class="resources-page">
            <header class="section-header">
                <h2>"Learning Resources"</h2>
            </header>
            <Show when=move || !ai_enabled>
                <p class="resources-page__notice">{crate::net::ai::AI_DISABLED_MESSAGE}</p>
            </Show>
            <nav class="resources-page__filters">
                <button
                    class="chip chip--filter"
                    class:chip--active=move || category.get().is_none()
                    on:click=move |_| category.set(None)
                >
                    "All"
                </button>
                {category_chips}
            </nav>
            <div class="resources-page__grid">{cards}</div>
        </div>
    }
}
