//! Toast tray rendering the shared notice queue.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <button
                            class=class
                            title="Dismiss"
                            on:click=move |_| notices.update(|n| n.dismiss(&id))
                        >
                            {notice.text}
                        </button>
                    }
                }
            />
        </div>
    }
}
