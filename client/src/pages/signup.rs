//! Signup page: creates an account via `auth/signup`, then sends the user to
//! the login page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::net::types::SignupRequest;
use crate::state::notices::NoticeState;
use crate::util::notify::{notify_error, notify_invalid, notify_success};
use crate::util::routes::AppRoute;

fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email and password.");
    }
    let has_domain = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !has_domain {
        return Err("Enter a valid email address.");
    }
    Ok(SignupRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_signup_input(&username.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                notify_invalid(notices, msg);
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.signup(&request).await {
                Ok(account) => {
                    log::info!("signup: created account {}", account.username);
                    notify_success(notices, "Account created. Please log in.");
                    navigate(AppRoute::Login.path(), NavigateOptions::default());
                }
                Err(err) => notify_error(notices, &err),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Create an account"</h1>
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
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>"Log in"</a>
                </p>
            </form>
        </div>
    }
}
