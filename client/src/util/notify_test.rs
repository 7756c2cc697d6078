use super::*;

fn status_error(raw: &str) -> ApiError {
    ApiError::Status { status: 400, body: Some(serde_json::from_str(raw).unwrap()) }
}

#[test]
fn error_text_prefixes_known_kinds() {
    assert_eq!(
        error_text(&status_error(r#"{"error":{"code":"VALIDATION_ERROR","message":"Password too short"}}"#)),
        "Validation Error: Password too short"
    );
    assert_eq!(
        error_text(&status_error(r#"{"type":"FileError","detail":"Unsupported file type"}"#)),
        "File Error: Unsupported file type"
    );
    assert_eq!(
        error_text(&status_error(r#"{"type":"ConflictError","detail":"Username already exists"}"#)),
        "Conflict: Username already exists"
    );
}

#[test]
fn error_text_leaves_generic_errors_unprefixed() {
    assert_eq!(error_text(&status_error(r#"{"detail":"Incorrect username or password"}"#)), "Incorrect username or password");
    assert_eq!(error_text(&ApiError::Network("Failed to fetch".to_owned())), "Failed to fetch");
}

#[test]
fn error_text_leaves_non_validation_codes_unprefixed() {
    assert_eq!(
        error_text(&status_error(
            r#"{"error":{"code":"DATABASE_ERROR","message":"An error occurred while accessing the database"}}"#
        )),
        "An error occurred while accessing the database"
    );
}

#[test]
fn notify_pushes_notices_with_levels() {
    Owner::new().with(|| {
        let notices = RwSignal::new(NoticeState::default());
        notify_invalid(notices, "Please enter a question");
        notify_success(notices, "Document enabled for QA");
        notify_error(notices, &status_error(r#"{"error":{"code":"NOT_FOUND_ERROR","message":"Document not found"}}"#));
        let items = notices.get_untracked().items;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].level, NoticeLevel::Error);
        assert_eq!(items[1].level, NoticeLevel::Success);
        assert_eq!(items[2].text, "Document not found");
    });
}
