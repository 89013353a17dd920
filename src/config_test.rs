use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.client.api_base_url, "http://localhost:5000/api");
    assert_eq!(cfg.client.asset_base_url, "http://localhost:5000");
    assert!(!cfg.client.provider_step);
    assert_eq!(cfg.client.default_provider_id, 1);
}

#[test]
fn asset_base_follows_api_base() {
    let cfg = HostConfig::from_lookup(lookup(&[("API_BASE_URL", "https://salon.example/api/")])).unwrap();
    assert_eq!(cfg.client.api_base_url, "https://salon.example/api");
    assert_eq!(cfg.client.asset_base_url, "https://salon.example");
}

#[test]
fn explicit_asset_base_wins() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("API_BASE_URL", "https://api.example/api"),
        ("ASSET_BASE_URL", "https://cdn.example/"),
    ]))
    .unwrap();
    assert_eq!(cfg.client.asset_base_url, "https://cdn.example");
}

#[test]
fn booking_overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BOOKING_PROVIDER_STEP", " Yes "),
        ("DEFAULT_PROVIDER_ID", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.client.provider_step);
    assert_eq!(cfg.client.default_provider_id, 7);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("BOOKING_PROVIDER_STEP", "")])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert!(!cfg.client.provider_step);
}

#[test]
fn unreadable_values_are_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });

    let err = HostConfig::from_lookup(lookup(&[("BOOKING_PROVIDER_STEP", "maybe")])).unwrap_err();
    assert!(err.to_string().contains("BOOKING_PROVIDER_STEP"));

    let err = HostConfig::from_lookup(lookup(&[("DEFAULT_PROVIDER_ID", "0")])).unwrap_err();
    assert!(err.to_string().contains("DEFAULT_PROVIDER_ID"));
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", "On"] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "false", "No", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
}
