//! Transient notification tray shared by every page.
//!
//! DESIGN
//! ======
//! Pages push notices instead of rendering their own error banners, so one
//! tray owns placement and auto-dismissal.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// How long a notice stays visible before auto-dismissal.
pub const NOTICE_TTL_MS: u32 = 5_000;

/// Visual severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub text: String,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), level, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}
