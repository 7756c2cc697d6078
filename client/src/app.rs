//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_tray::NoticeTray;
use crate::components::route_guard::{RequireAnonymous, RequireAuthenticated};
use crate::net::api::HttpApi;
use crate::pages::{
    dashboard::DashboardPage, ingest::IngestPage, login::LoginPage, qa::QaPage, redirect::RootRedirect,
    signup::SignupPage,
};
use crate::state::notices::NoticeState;
use crate::state::session::SessionStore;
use crate::util::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, API client and notice tray as context, starts
/// the one-time session check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let api = HttpApi::default();
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(api.clone());
    provide_context(notices);

    // Effects only run in the browser, so the server render stays pending.
    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            session.initialize(&api).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ragdesk.css"/>
        <Title text="RAG Q&A App"/>

        <Router>
            <NoticeTray/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(AppRoute::Root.segment()) view=RootRedirect/>
                <Route
                    path=StaticSegment(AppRoute::Login.segment())
                    view=|| view! { <RequireAnonymous><LoginPage/></RequireAnonymous> }
                />
                <Route
                    path=StaticSegment(AppRoute::Signup.segment())
                    view=|| view! { <RequireAnonymous><SignupPage/></RequireAnonymous> }
                />
                <Route
                    path=StaticSegment(AppRoute::Dashboard.segment())
                    view=|| view! { <RequireAuthenticated><DashboardPage/></RequireAuthenticated> }
                />
                <Route
                    path=StaticSegment(AppRoute::Ingest.segment())
                    view=|| view! { <RequireAuthenticated><IngestPage/></RequireAuthenticated> }
                />
                <Route
                    path=StaticSegment(AppRoute::Qa.segment())
                    view=|| view! { <RequireAuthenticated><QaPage/></RequireAuthenticated> }
                />
            </Routes>
        </Router>
    }
}
