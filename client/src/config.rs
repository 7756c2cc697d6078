//! Build-time client configuration.
//!
//! The backend URL is baked into the WASM bundle from `RAG_API_URL` when the
//! crate is compiled; browsers have no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `RAG_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend base URL, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("RAG_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Join a backend-relative path such as `auth/validate` onto `base`.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
