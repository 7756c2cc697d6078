//! Question answering page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends one question at a time to `rag/query` and renders the literal answer
//! text under "Answer:" once the call completes.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::net::api::HttpApi;
use crate::state::notices::NoticeState;
use crate::state::qa::QaState;
use crate::util::notify::{notify_error, notify_invalid};

#[component]
pub fn QaPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let qa = RwSignal::new(QaState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if qa.get_untracked().loading {
            return;
        }
        let mut started = None;
        qa.update(|s| started = s.begin());
        let Some(question) = started else {
            notify_invalid(notices, "Please enter a question");
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.ask(&question).await {
                Ok(reply) => qa.update(|s| s.finish(Some(reply.answer))),
                Err(err) => {
                    qa.update(|s| s.finish(None));
                    notify_error(notices, &err);
                }
            }
        });
    };

    view! {
        <Layout>
            <div class="qa-page">
                <h1 class="page__title">"Ask a Question"</h1>

                <form class="qa-page__form" on:submit=on_submit>
                    <textarea
                        class="qa-page__question"
                        rows="4"
                        placeholder="Enter your question..."
                        prop:value=move || qa.get().question
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            qa.update(|s| s.question = value);
                        }
                        disabled=move || qa.get().loading
                    ></textarea>
                    <button class="qa-page__submit" type="submit" disabled=move || qa.get().loading>
                        {move || qa.get().submit_label()}
                    </button>
                </form>

                <Show when=move || qa.get().loading>
                    <div class="qa-page__thinking">
                        <h2 class="qa-page__heading">
                            "Thinking"
                            <span class="qa-page__dots" aria-hidden="true">
                                <span></span>
                                <span></span>
                                <span></span>
                            </span>
                        </h2>
                        <p class="qa-page__wait">"Processing your question, please wait..."</p>
                    </div>
                </Show>
                <Show when=move || qa.get().visible_answer().is_some()>
                    <div class="qa-page__answer">
                        <h2 class="qa-page__heading">"Answer:"</h2>
                        <p class="qa-page__answer-text">
                            {move || qa.get().visible_answer().unwrap_or_default().to_owned()}
                        </p>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
