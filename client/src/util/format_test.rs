use super::*;

#[test]
fn upload_date_keeps_calendar_date() {
    assert_eq!(upload_date("2024-05-01T10:22:03.120000"), "2024-05-01");
    assert_eq!(upload_date("2024-05-01 10:22:03"), "2024-05-01");
    assert_eq!(upload_date(" 2024-05-01 "), "2024-05-01");
}

#[test]
fn upload_date_passes_through_unrecognized_values() {
    assert_eq!(upload_date("yesterday"), "yesterday");
    assert_eq!(upload_date(""), "");
}

#[test]
fn qa_toggle_copy_reflects_state() {
    assert_eq!(qa_toggle_label(true), "Enabled for QA");
    assert_eq!(qa_toggle_label(false), "Click to Enable QA");
    assert_eq!(qa_toggle_notice(true), "Document disabled for QA");
    assert_eq!(qa_toggle_notice(false), "Document enabled for QA");
}

#[test]
fn picked_file_name_strips_fake_path() {
    assert_eq!(picked_file_name(r"C:\fakepath\report.pdf"), Some("report.pdf".to_owned()));
    assert_eq!(picked_file_name("notes.txt"), Some("notes.txt".to_owned()));
    assert_eq!(picked_file_name(""), None);
}
