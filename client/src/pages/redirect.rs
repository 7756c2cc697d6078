//! Root path resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` has no view of its own. Once the startup session check settles it
//! forwards to the dashboard or the login page, replacing the history entry
//! so Back does not land on `/` again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::SessionPlaceholder;
use crate::state::session::SessionStore;
use crate::util::guard::root_destination;

#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(route) = root_destination(&session.state().get()) {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <SessionPlaceholder/> }
}
