use super::*;

#[test]
fn normalize_base_url_defaults_when_unset_or_blank() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_URL);
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_URL);
    assert_eq!(normalize_base_url(Some("/")), DEFAULT_API_URL);
}

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://rag.example.com//")), "https://rag.example.com");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("http://localhost:8000", "auth/validate"), "http://localhost:8000/auth/validate");
    assert_eq!(endpoint("http://localhost:8000/", "/rag/query"), "http://localhost:8000/rag/query");
}
