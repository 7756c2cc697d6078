//! One row of the ingest page's document list.

use leptos::prelude::*;

use crate::net::types::Document;
use crate::util::format::{qa_toggle_label, upload_date};

/// Document name, upload date and retrieval toggle.
///
/// `on_toggle` receives the document id and its state before the toggle.
#[component]
pub fn DocumentRow(document: Document, on_toggle: Callback<(String, bool)>) -> impl IntoView {
    let Document { id, name, created_at, enabled_for_qa } = document;
    let uploaded = format!("Uploaded on {}", upload_date(&created_at));

    view! {
        <li class="document-row">
            <div class="document-row__meta">
                <h3 class="document-row__name">{name}</h3>
                <p class="document-row__date">{uploaded}</p>
            </div>
            <button
                class="document-row__toggle"
                class:document-row__toggle--enabled=enabled_for_qa
                on:click=move |_| on_toggle.run((id.clone(), enabled_for_qa))
            >
                {qa_toggle_label(enabled_for_qa)}
            </button>
        </li>
    }
}
