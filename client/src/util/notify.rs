//! Shared notifier that turns failures into transient notices.
//!
//! ERROR HANDLING
//! ==============
//! Page-level operations catch every failure and pass it here; nothing is
//! re-thrown past this boundary. Session initialization is the exception and
//! never reaches the notifier.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::notices::{NOTICE_TTL_MS, NoticeLevel, NoticeState};

/// Notice text for an API failure, prefixed by its backend error kind.
pub fn error_text(err: &ApiError) -> String {
    let message = err.message();
    match err.kind().label() {
        Some(label) => format!("{label}: {message}"),
        None => message,
    }
}

/// Show an API failure.
pub fn notify_error(notices: RwSignal<NoticeState>, err: &ApiError) {
    log::error!("request failed: {err:?}");
    show(notices, NoticeLevel::Error, error_text(err));
}

/// Show a locally detected problem (empty form field and the like).
pub fn notify_invalid(notices: RwSignal<NoticeState>, text: &str) {
    show(notices, NoticeLevel::Error, text.to_owned());
}

pub fn notify_success(notices: RwSignal<NoticeState>, text: &str) {
    show(notices, NoticeLevel::Success, text.to_owned());
}

fn show(notices: RwSignal<NoticeState>, level: NoticeLevel, text: String) {
    let mut id = String::new();
    notices.update(|n| id = n.push(level, text));
    schedule_dismiss(notices, id);
}

fn schedule_dismiss(notices: RwSignal<NoticeState>, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notices, id, NOTICE_TTL_MS);
    }
}
