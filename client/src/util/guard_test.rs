use super::*;

fn states() -> Vec<SessionState> {
    let mut loading_with_user = SessionState::pending();
    loading_with_user.sign_in("early");
    vec![
        SessionState::pending(),
        loading_with_user,
        SessionState::resolved(None),
        SessionState::resolved(Some("alice".to_owned())),
    ]
}

#[test]
fn require_authenticated_waits_while_loading() {
    for state in states().into_iter().filter(SessionState::loading) {
        assert_eq!(GuardPolicy::RequireAuthenticated.decide(&state), GuardDecision::Pending);
        assert_eq!(GuardPolicy::RequireAnonymous.decide(&state), GuardDecision::Pending);
    }
}

#[test]
fn require_authenticated_renders_iff_signed_in() {
    for state in states() {
        let decision = GuardPolicy::RequireAuthenticated.decide(&state);
        if state.loading() {
            continue;
        }
        if state.is_authenticated() {
            assert_eq!(decision, GuardDecision::Render);
        } else {
            assert_eq!(decision, GuardDecision::Redirect(AppRoute::Login));
        }
    }
}

#[test]
fn require_anonymous_is_the_complement() {
    for state in states().into_iter().filter(|s| !s.loading()) {
        let authed = GuardPolicy::RequireAuthenticated.decide(&state);
        let anon = GuardPolicy::RequireAnonymous.decide(&state);
        assert_ne!(authed == GuardDecision::Render, anon == GuardDecision::Render);
    }
}

#[test]
fn require_anonymous_sends_signed_in_users_to_dashboard() {
    let state = SessionState::resolved(Some("alice".to_owned()));
    assert_eq!(GuardPolicy::RequireAnonymous.decide(&state), GuardDecision::Redirect(AppRoute::Dashboard));
}

#[test]
fn login_then_guard_check_renders_protected_view() {
    let mut state = SessionState::resolved(None);
    state.sign_in("alice");
    assert_eq!(GuardPolicy::RequireAuthenticated.decide(&state), GuardDecision::Render);
}

#[test]
fn guard_recomputes_after_logout() {
    let mut state = SessionState::resolved(Some("bob".to_owned()));
    assert_eq!(GuardPolicy::RequireAuthenticated.decide(&state), GuardDecision::Render);
    state.sign_out();
    assert_eq!(GuardPolicy::RequireAuthenticated.decide(&state), GuardDecision::Redirect(AppRoute::Login));
}

#[test]
fn root_destination_follows_session() {
    assert_eq!(root_destination(&SessionState::pending()), None);
    assert_eq!(root_destination(&SessionState::resolved(None)), Some(AppRoute::Login));
    assert_eq!(root_destination(&SessionState::resolved(Some("bob".to_owned()))), Some(AppRoute::Dashboard));
}
