//! Document inventory state for the ingest page.
//!
//! DESIGN
//! ======
//! List loading and upload progress are tracked separately so the upload
//! control stays usable while the list refreshes.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::Document;

#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<Document>,
    pub loading: bool,
    pub uploading: bool,
    /// Name of the file picked for upload, if any.
    pub selected_file: Option<String>,
}

impl DocumentsState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Upload is possible with a picked file and no upload in flight.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.uploading
    }

    pub fn upload_label(&self) -> &'static str {
        if self.uploading { "Uploading..." } else { "Upload Document" }
    }

    pub fn replace_items(&mut self, items: Vec<Document>) {
        self.items = items;
        self.loading = false;
    }
}
