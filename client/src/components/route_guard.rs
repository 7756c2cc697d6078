//! Route guards wrapping views that depend on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/` is wrapped in one of these. They wait for the
//! startup session check, then render their children or replace the current
//! history entry with the policy's redirect target.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::{GuardDecision, GuardPolicy};

/// Renders children for signed-in users; sends everyone else to `/login`.
#[component]
pub fn RequireAuthenticated(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::RequireAuthenticated, children)
}

/// Renders children for signed-out users; sends everyone else to `/dashboard`.
#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::RequireAnonymous, children)
}

/// Neutral placeholder shown while the session is unknown.
#[component]
pub fn SessionPlaceholder() -> impl IntoView {
    view! {
        <div class="session-check">
            <p class="session-check__text">"Checking session..."</p>
        </div>
    }
}

fn guarded(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| policy.decide(&session.state().get()));

    Effect::new(move || {
        if let GuardDecision::Redirect(route) = decision.get() {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=|| view! { <SessionPlaceholder/> }
        >
            {children()}
        </Show>
    }
}
