//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::layout::Layout;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="page__title">"Welcome to the RAG Q&A System"</h2>
            <p class="page__lead">"Use the sidebar to manage documents or ask questions."</p>
        </Layout>
    }
}
