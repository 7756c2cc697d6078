//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components and the root redirector share these pure decisions so
//! the render-or-redirect rules are testable without a browser. A decision is
//! a function of `(loading, authenticated)` only.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;
use crate::util::routes::AppRoute;

/// Which sessions may see a guarded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Signed-in users only; others go to the login entry point.
    RequireAuthenticated,
    /// Signed-out users only; others go to the authenticated home.
    RequireAnonymous,
}

/// What a guard does for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still outstanding; show the placeholder.
    Pending,
    Render,
    /// Replace the current history entry with this route.
    Redirect(AppRoute),
}

impl GuardPolicy {
    pub fn decide(self, session: &SessionState) -> GuardDecision {
        if session.loading() {
            return GuardDecision::Pending;
        }
        let admitted = match self {
            Self::RequireAuthenticated => session.is_authenticated(),
            Self::RequireAnonymous => !session.is_authenticated(),
        };
        if admitted { GuardDecision::Render } else { GuardDecision::Redirect(self.redirect_target()) }
    }

    pub fn redirect_target(self) -> AppRoute {
        match self {
            Self::RequireAuthenticated => AppRoute::login_entry(),
            Self::RequireAnonymous => AppRoute::authenticated_home(),
        }
    }
}

/// Destination for `/`, or `None` while the session is still loading.
pub fn root_destination(session: &SessionState) -> Option<AppRoute> {
    if session.loading() {
        None
    } else if session.is_authenticated() {
        Some(AppRoute::authenticated_home())
    } else {
        Some(AppRoute::login_entry())
    }
}
