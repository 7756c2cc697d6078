//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notices`, `documents`, `qa`) so
//! components depend on small focused models.

pub mod documents;
pub mod notices;
pub mod qa;
pub mod session;
