//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos client and serves its assets; every data
//! call goes from the browser straight to the RAG backend.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Leptos SSR routes, `/pkg` assets and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos site options cannot be resolved from the
/// `LEPTOS_*` environment (normally set by `cargo leptos`).
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    Ok(router(conf.leptos_options))
}

fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(file_and_error_handler(client::app::shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
