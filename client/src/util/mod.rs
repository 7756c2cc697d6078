//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and formatting logic lives here so pages and components stay
//! thin and the rules stay testable outside the browser.

pub mod format;
pub mod guard;
pub mod notify;
pub mod routes;
