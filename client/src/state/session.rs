//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the root redirector and the navbar all read the one
//! [`SessionStore`] provided as context by `App`. The store is re-derived once
//! per page load from `auth/validate`; afterwards only explicit login and
//! logout change it.
//!
//! INVARIANTS
//! ==========
//! - Authenticated exactly when a non-empty username is held. The flag is
//!   derived from the username so the two cannot disagree.
//! - While `loading` is set, guards treat the session as unknown.
//! - `initialize` ends with `loading == false` on every path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::SessionApi;
use crate::net::error::ApiError;
use crate::net::types::Identity;

/// Client-held belief about the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    username: Option<String>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::pending()
    }
}

impl SessionState {
    /// Startup state: unknown identity, validation outstanding.
    pub fn pending() -> Self {
        Self { username: None, loading: true }
    }

    /// Settled state for a known identity, or for no session when `None`.
    pub fn resolved(username: Option<String>) -> Self {
        let mut state = Self { username: None, loading: false };
        if let Some(name) = username {
            state.sign_in(&name);
        }
        state
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Settle the state from a validate outcome.
    pub fn apply_validation(&mut self, outcome: &ValidateOutcome) {
        self.username = match outcome {
            ValidateOutcome::Authenticated(identity) => Some(identity.username.clone()),
            ValidateOutcome::Unauthenticated | ValidateOutcome::Unreachable(_) => None,
        };
        self.loading = false;
    }

    /// Record a confirmed login. The name is stored as given; a blank one is
    /// refused and leaves the session signed out. Returns whether the
    /// identity was stored.
    pub fn sign_in(&mut self, username: &str) -> bool {
        if username.trim().is_empty() {
            self.username = None;
            return false;
        }
        self.username = Some(username.to_owned());
        true
    }

    pub fn sign_out(&mut self) {
        self.username = None;
    }
}

/// Result of the startup session check.
///
/// The UI treats both failure tags identically (fail-closed); the split only
/// changes how the outcome is logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidateOutcome {
    Authenticated(Identity),
    /// The backend answered and rejected the credential.
    Unauthenticated,
    /// No usable answer: transport failure, server error or malformed body.
    Unreachable(ApiError),
}

impl ValidateOutcome {
    pub fn from_result(result: Result<Identity, ApiError>) -> Self {
        match result {
            Ok(identity) if !identity.username.trim().is_empty() => Self::Authenticated(identity),
            Ok(_) => Self::Unreachable(ApiError::Decode("validate returned an empty username".to_owned())),
            Err(ApiError::Status { status: 401 | 403, .. }) => Self::Unauthenticated,
            Err(err) => Self::Unreachable(err),
        }
    }
}

/// Call `auth/validate` and tag the outcome. Never fails.
pub async fn validate_session<A: SessionApi + ?Sized>(api: &A) -> ValidateOutcome {
    let outcome = ValidateOutcome::from_result(api.validate().await);
    match &outcome {
        ValidateOutcome::Authenticated(identity) => {
            log::info!("session: validated as {}", identity.username);
        }
        ValidateOutcome::Unauthenticated => log::debug!("session: no active session"),
        ValidateOutcome::Unreachable(err) => log::warn!("session: validate failed ({err}); treating as signed out"),
    }
    outcome
}

/// Shared handle to the session signal plus its lifecycle operations.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    initialized: RwSignal<bool>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::pending()), initialized: RwSignal::new(false) }
    }

    /// Reactive view of the session; reading it subscribes the caller.
    pub fn state(self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current value without subscribing.
    pub fn snapshot(self) -> SessionState {
        self.state.get_untracked()
    }

    /// Resolve the startup session from the backend. Runs once per store;
    /// later calls return immediately.
    pub async fn initialize<A: SessionApi + ?Sized>(self, api: &A) {
        if self.initialized.get_untracked() {
            log::debug!("session: initialize already ran");
            return;
        }
        self.initialized.set(true);
        let outcome = validate_session(api).await;
        self.state.update(|s| s.apply_validation(&outcome));
    }

    /// Record a login the caller already confirmed with the backend.
    pub fn login(self, username: &str) {
        let mut stored = false;
        self.state.update(|s| stored = s.sign_in(username));
        if stored {
            log::info!("session: signed in as {username}");
        } else {
            log::warn!("session: refused login with an empty username");
        }
    }

    /// Invalidate the backend session, then clear local state whatever the
    /// backend said.
    pub async fn logout<A: SessionApi + ?Sized>(self, api: &A) {
        if let Err(err) = api.logout().await {
            log::warn!("session: remote logout failed ({err}); clearing locally");
        }
        self.state.update(SessionState::sign_out);
        log::info!("session: signed out");
    }
}
