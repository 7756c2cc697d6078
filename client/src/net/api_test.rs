use super::*;

#[test]
fn url_joins_paths_onto_base() {
    let api = HttpApi::new("http://localhost:8000/");
    assert_eq!(api.url(paths::VALIDATE), "http://localhost:8000/auth/validate");
    assert_eq!(api.url(paths::QUERY), "http://localhost:8000/rag/query");
}

#[test]
fn default_api_uses_build_configured_base() {
    assert_eq!(HttpApi::default().base_url(), crate::config::api_base_url());
}

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(paths::LOGIN, "auth/login");
    assert_eq!(paths::SIGNUP, "auth/signup");
    assert_eq!(paths::LOGOUT, "auth/logout");
    assert_eq!(paths::UPLOAD, "documents/upload");
    assert_eq!(paths::LIST, "documents/list");
    assert_eq!(paths::SELECT, "documents/select");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_calls_are_unavailable() {
    let api = HttpApi::new("http://localhost:8000");
    assert_eq!(futures::executor::block_on(api.validate()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.list_documents()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.ask("What is X?")), Err(ApiError::Unavailable));
}
