//! Login page: username + password against `auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAnonymous`. A successful login records the username
//! in the session store; the guard then replaces this route with the
//! dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::LoginForm;
use crate::state::notices::NoticeState;
use crate::state::session::SessionStore;
use crate::util::notify::{notify_error, notify_invalid};
use crate::util::routes::AppRoute;

fn validate_login_input(username: &str, password: &str) -> Result<LoginForm, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginForm { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<HttpApi>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(form) => form,
            Err(msg) => {
                notify_invalid(notices, msg);
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&form).await {
                Ok(()) => {
                    password.set(String::new());
                    session.login(&form.username);
                }
                Err(err) => notify_error(notices, &err),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"RAG Q&A App"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <input
                    class="auth-input"
                    type="text"
                    autocomplete="username"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-card__switch">
                    "No account yet? "
                    <a href=AppRoute::Signup.path()>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
