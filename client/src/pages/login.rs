//! Sign-in page: email lookup against the member directory.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionHandle, login_error_message};

/// Trimmed email, or the message to show for an unusable one.
fn validate_email(raw: &str) -> Result<&str, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your club email first.");
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') =>
        {
            Ok(email)
        }
        _ => Err("That does not look like an email address."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let demo_accounts = session.directory_users();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = email.get();
        let value = match validate_email(&raw) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.login(value) {
            Ok(_) => {
                info.set(String::new());
                navigate("/dashboard", NavigateOptions::default());
            }
            Err(e) => info.set(login_error_message(&e)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__back">"← Back"</a>
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in with your club email"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@ictclub.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Demo accounts"</p>
                <ul class="login-demo">
                    {demo_accounts
                        .into_iter()
                        .map(|user| {
                            let address = user.email.clone();
                            view! {
                                <li>
                                    <button
                                        class="btn btn--link"
                                        type="button"
                                        on:click=move |_| email.set(address.clone())
                                    >
                                        {user.email.clone()}
                                    </button>
                                    <span class="role-badge">{user.role.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
