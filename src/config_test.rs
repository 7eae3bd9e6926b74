use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bot_service_url, DEFAULT_BOT_SERVICE_URL);
    assert_eq!(cfg.timeouts, BotTimeouts::default());
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("BOT_SERVICE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bot_service_url, DEFAULT_BOT_SERVICE_URL);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BOT_SERVICE_URL", "https://classifieds.example/api/chatbot/"),
        ("BOT_TIMEOUT_SECS", "45"),
        ("BOT_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bot_service_url, "https://classifieds.example/api/chatbot/");
    assert_eq!(cfg.timeouts, BotTimeouts { request_secs: 45, connect_secs: 3 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(45));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(3));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = HostConfig::from_lookup(lookup_from(&[("BOT_TIMEOUT_SECS", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: "BOT_TIMEOUT_SECS", value: "0".to_owned() });
}

#[test]
fn from_lookup_rejects_non_numeric_connect_timeout() {
    let err = HostConfig::from_lookup(lookup_from(&[("BOT_CONNECT_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert!(err.to_string().contains("BOT_CONNECT_TIMEOUT_SECS"));
}

#[test]
fn from_lookup_rejects_non_http_service_url() {
    let err = HostConfig::from_lookup(lookup_from(&[("BOT_SERVICE_URL", "ftp://files.example/bot")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidServiceUrl(_)));
}

#[test]
fn from_lookup_rejects_unparseable_service_url() {
    let err = HostConfig::from_lookup(lookup_from(&[("BOT_SERVICE_URL", "not a url")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidServiceUrl("not a url".to_owned()));
}
