//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod document_row;
pub mod layout;
pub mod notice_tray;
pub mod route_guard;
