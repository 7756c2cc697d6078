use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_filter_are_read() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("RUST_LOG", "ragdesk=debug")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.log_filter, "ragdesk=debug");
}

#[test]
fn blank_port_falls_back_to_default() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
    assert_eq!(config.port, 3000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidEnv { key: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}
