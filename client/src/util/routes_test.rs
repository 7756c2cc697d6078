use super::*;

#[test]
fn paths_match_client_routes() {
    assert_eq!(AppRoute::Root.path(), "/");
    assert_eq!(AppRoute::Login.path(), "/login");
    assert_eq!(AppRoute::Signup.path(), "/signup");
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    assert_eq!(AppRoute::Ingest.path(), "/ingest");
    assert_eq!(AppRoute::Qa.path(), "/qa");
}

#[test]
fn segment_drops_leading_slash() {
    assert_eq!(AppRoute::Root.segment(), "");
    assert_eq!(AppRoute::Qa.segment(), "qa");
}

#[test]
fn from_path_round_trips_every_route() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
    assert_eq!(AppRoute::from_path("/ingest/"), Some(AppRoute::Ingest));
    assert_eq!(AppRoute::from_path("/board/1"), None);
}
