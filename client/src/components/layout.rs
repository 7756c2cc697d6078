//! Authenticated page chrome: navbar, sidebar and content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every authenticated page. The navbar owns the logout flow; once the
//! session clears, the page's route guard performs the redirect to `/login`.
//! The sidebar collapses behind a toggle on narrow screens.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::session::SessionStore;
use crate::util::routes::AppRoute;

const SIDEBAR_LINKS: [(&str, AppRoute); 3] = [
    ("Dashboard", AppRoute::Dashboard),
    ("Ingest Documents", AppRoute::Ingest),
    ("Ask a Question", AppRoute::Qa),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="layout">
            <Navbar sidebar_open=sidebar_open/>
            <Sidebar open=sidebar_open/>
            <main class="layout__main">{children()}</main>
        </div>
    }
}

/// Top bar with the app title, greeting and logout.
#[component]
fn Navbar(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<HttpApi>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            session.logout(&api).await;
            busy.set(false);
        });
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <button
                    class="navbar__menu"
                    aria-label="Toggle navigation"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <h1 class="navbar__title">"RAG Q&A App"</h1>
            </div>
            <Show when=move || session.state().get().is_authenticated()>
                <div class="navbar__user">
                    <span class="navbar__greeting">
                        "Hello, "
                        {move || session.state().get().username().unwrap_or_default().to_owned()}
                    </span>
                    <button class="navbar__logout" on:click=on_logout.clone() disabled=move || busy.get()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="sidebar__overlay" on:click=move |_| open.set(false)></div>
        </Show>
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <nav class="sidebar__nav">
                {SIDEBAR_LINKS
                    .into_iter()
                    .map(|(label, route)| {
                        view! {
                            <a class="sidebar__link" href=route.path() on:click=move |_| open.set(false)>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
