//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Route guarding happens in `app`, not in the pages.

pub mod dashboard;
pub mod ingest;
pub mod login;
pub mod qa;
pub mod redirect;
pub mod signup;
