use super::*;

#[test]
fn identity_deserializes_validate_payload() {
    let identity: Identity = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
    assert_eq!(identity.username, "bob");
}

#[test]
fn document_list_deserializes_backend_rows() {
    let raw = r#"[
        {"id":"6f1c","name":"handbook.pdf","created_at":"2024-05-01T10:22:03.120000","enabled_for_qa":true},
        {"id":"9a2e","name":"notes.txt","created_at":"2024-05-02T08:00:00","enabled_for_qa":false}
    ]"#;
    let docs: Vec<Document> = serde_json::from_str(raw).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].name, "handbook.pdf");
    assert!(docs[0].enabled_for_qa);
    assert!(!docs[1].enabled_for_qa);
}

#[test]
fn document_selection_always_carries_default_session() {
    let body = serde_json::to_value(DocumentSelection::new(vec!["d1".to_owned()])).unwrap();
    assert_eq!(body, serde_json::json!({ "session_id": "default", "document_ids": ["d1"] }));
}

#[test]
fn login_form_fields_are_username_then_password() {
    let form = LoginForm { username: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.fields(), [("username", "alice"), ("password", "pw")]);
}

#[test]
fn error_body_reads_structured_error() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error":{"code":"CONFLICT_ERROR","message":"Username taken"}}"#).unwrap();
    let detail = body.error.unwrap();
    assert_eq!(detail.code.as_deref(), Some("CONFLICT_ERROR"));
    assert_eq!(detail.message.as_deref(), Some("Username taken"));
}

#[test]
fn error_body_flattens_validation_detail_list() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#,
    )
    .unwrap();
    assert_eq!(body.detail.as_deref(), Some("value is not a valid email address"));
}

#[test]
fn error_body_reads_type_discriminator() {
    let body: ErrorBody = serde_json::from_str(r#"{"type":"FileError","message":"bad pdf"}"#).unwrap();
    assert_eq!(body.kind.as_deref(), Some("FileError"));
    assert_eq!(body.message.as_deref(), Some("bad pdf"));
}
