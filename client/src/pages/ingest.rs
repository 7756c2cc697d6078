//! Document ingest page: upload files and choose which ones feed retrieval.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched on mount and after every upload or toggle. Every
//! failure is routed to the notifier; the page never blocks on one.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use leptos::prelude::*;

use crate::components::document_row::DocumentRow;
use crate::components::layout::Layout;
use crate::net::api::HttpApi;
use crate::state::documents::DocumentsState;
use crate::state::notices::NoticeState;
use crate::util::format::{picked_file_name, qa_toggle_notice};
use crate::util::notify::{notify_error, notify_success};

#[component]
pub fn IngestPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let docs = RwSignal::new(DocumentsState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let mount_api = api.clone();
    Effect::new(move || refresh_documents(mount_api.clone(), docs, notices));

    let on_file_change = move |ev: leptos::ev::Event| {
        let picked = picked_file_name(&event_target_value(&ev));
        docs.update(|d| d.selected_file = picked);
    };

    let upload_api = api.clone();
    let on_upload = move |_| upload_selected(upload_api.clone(), docs, notices, file_input);

    let on_toggle = Callback::new(move |(id, was_enabled): (String, bool)| {
        docs.update(|d| d.loading = true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.select_documents(vec![id]).await {
                Ok(()) => {
                    notify_success(notices, qa_toggle_notice(was_enabled));
                    refresh_documents(api, docs, notices);
                }
                Err(err) => {
                    notify_error(notices, &err);
                    docs.update(|d| d.loading = false);
                }
            }
        });
    });

    view! {
        <Layout>
            <div class="ingest-page">
                <h1 class="page__title">"Ingest Documents"</h1>

                <div class="ingest-page__upload">
                    <input
                        class="ingest-page__file"
                        type="file"
                        node_ref=file_input
                        on:change=on_file_change
                        disabled=move || docs.get().uploading
                    />
                    <button
                        class="ingest-page__upload-button"
                        class:ingest-page__upload-button--busy=move || docs.get().uploading
                        on:click=on_upload
                        disabled=move || !docs.get().can_upload()
                    >
                        {move || docs.get().upload_label()}
                    </button>
                </div>

                <Show
                    when=move || !docs.get().loading
                    fallback=|| view! {
                        <div class="ingest-page__loading">
                            <div class="spinner"></div>
                            <p>"Loading documents..."</p>
                        </div>
                    }
                >
                    <Show
                        when=move || !docs.get().is_empty()
                        fallback=|| view! { <p class="ingest-page__empty">"No documents uploaded yet"</p> }
                    >
                        <ul class="ingest-page__list">
                            <For
                                each=move || docs.get().items
                                key=|doc| (doc.id.clone(), doc.enabled_for_qa)
                                children=move |doc| view! { <DocumentRow document=doc on_toggle=on_toggle/> }
                            />
                        </ul>
                    </Show>
                </Show>
            </div>
        </Layout>
    }
}

fn refresh_documents(api: HttpApi, docs: RwSignal<DocumentsState>, notices: RwSignal<NoticeState>) {
    docs.update(|d| d.loading = true);
    leptos::task::spawn_local(async move {
        match api.list_documents().await {
            Ok(items) => docs.update(|d| d.replace_items(items)),
            Err(err) => {
                docs.update(|d| d.loading = false);
                notify_error(notices, &err);
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn upload_selected(
    api: HttpApi,
    docs: RwSignal<DocumentsState>,
    notices: RwSignal<NoticeState>,
    file_input: NodeRef<leptos::html::Input>,
) {
    use crate::util::notify::notify_invalid;

    if docs.get_untracked().uploading {
        return;
    }
    let Some(file) = file_input
        .try_get_untracked()
        .flatten()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
    else {
        notify_invalid(notices, "Please select a file first.");
        return;
    };
    docs.update(|d| d.uploading = true);
    leptos::task::spawn_local(async move {
        match api.upload_document(&file).await {
            Ok(_) => {
                notify_success(notices, "Document uploaded successfully!");
                docs.update(|d| d.selected_file = None);
                reset_file_input(file_input);
                refresh_documents(api, docs, notices);
            }
            Err(err) => notify_error(notices, &err),
        }
        docs.update(|d| d.uploading = false);
    });
}

/// Clear the file picker after an upload. Returns `false` when the input is
/// gone, which happens if the user left the page while the request was in
/// flight and the route's owner was disposed.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn reset_file_input(file_input: NodeRef<leptos::html::Input>) -> bool {
    match file_input.try_get_untracked().flatten() {
        Some(input) => {
            input.set_value("");
            true
        }
        None => false,
    }
}

#[cfg(not(feature = "hydrate"))]
fn upload_selected(
    _api: HttpApi,
    _docs: RwSignal<DocumentsState>,
    _notices: RwSignal<NoticeState>,
    _file_input: NodeRef<leptos::html::Input>,
) {
}
