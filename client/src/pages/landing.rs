//! Public landing page.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    ("Events", "Workshops, hackathons, and talks run by members for members."),
    ("Projects", "Join a team or pitch your own build with help from the AI idea lab."),
    ("Resources", "Guides and recordings, with AI summaries for a quick start."),
    ("Community", "Board members and admins keep the club organized and welcoming."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__nav">
                <span class="landing__brand">"ICT Club"</span>
                <a href="/auth" class="btn btn--primary">"Member Login"</a>
            </header>
            <section class="landing__hero">
                <h1>"Build, learn, and ship together."</h1>
                <p class="landing__lead">
                    "The ICT Club portal brings events, projects, and learning resources into one place."
                </p>
                <a href="/auth" class="btn btn--primary btn--lg">"Get Started"</a>
            </section>
            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <article class="card feature-card">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
