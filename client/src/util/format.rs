//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Calendar date of an ISO-8601 timestamp (`2024-05-01T10:22:03` -> `2024-05-01`).
/// Values without a time part are returned trimmed; unparseable input is
/// shown as-is rather than hidden.
pub fn upload_date(created_at: &str) -> String {
    let trimmed = created_at.trim();
    let date = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    let looks_like_date = date.len() == 10
        && date
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if looks_like_date { date.to_owned() } else { trimmed.to_owned() }
}

/// Button label for a document's retrieval toggle.
pub fn qa_toggle_label(enabled_for_qa: bool) -> &'static str {
    if enabled_for_qa { "Enabled for QA" } else { "Click to Enable QA" }
}

/// Success notice after toggling; `was_enabled` is the state before the toggle.
pub fn qa_toggle_notice(was_enabled: bool) -> &'static str {
    if was_enabled { "Document disabled for QA" } else { "Document enabled for QA" }
}

/// File name from a file input's value, dropping the browser's fake path
/// (`C:\fakepath\report.pdf` -> `report.pdf`).
pub fn picked_file_name(input_value: &str) -> Option<String> {
    let name = input_value.rsplit(['\\', '/']).next().unwrap_or_default().trim();
    if name.is_empty() { None } else { Some(name.to_owned()) }
}
