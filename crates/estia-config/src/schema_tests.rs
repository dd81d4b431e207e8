use super::*;

#[test]
fn test_default_target() {
    let target = TargetConfig::default();
    assert!(target.url.starts_with("https://"));
    assert_eq!(target.expected_phrase, "get notified");
    assert_eq!(target.settle_delay_ms, 5000);
    assert_ne!(target.one_bedroom, target.two_bedroom);
}

#[test]
fn test_default_browser() {
    let browser = BrowserConfig::default();
    assert_eq!(browser.debug_port, 9222);
    assert_eq!(browser.viewport_width, 1920);
    assert_eq!(browser.viewport_height, 1080);
    assert_eq!(browser.page_load_timeout_secs, 15);
    assert!(browser.headless);
    assert!(browser.chrome_path.is_none());
}

#[test]
fn test_default_twilio_api_base() {
    let twilio = TwilioConfig::default();
    assert_eq!(twilio.api_base, "https://api.twilio.com");
    assert!(twilio.account_sid.is_empty());
}

#[test]
fn test_state_paths_use_dir() {
    let state = StateConfig {
        dir: Some(PathBuf::from("/var/lib/estia")),
        ..Default::default()
    };
    assert_eq!(
        state.one_bedroom_marker_path(),
        PathBuf::from("/var/lib/estia/check_one.log")
    );
    assert_eq!(
        state.two_bedroom_marker_path(),
        PathBuf::from("/var/lib/estia/check_two.log")
    );
    assert_eq!(
        state.failure_counter_path(),
        PathBuf::from("/var/lib/estia/count.json")
    );
    assert_eq!(state.alert_threshold, 3);
}

#[test]
fn test_state_default_dir_is_home() {
    let state = StateConfig::default();
    assert_eq!(state.base_dir(), home_dir());
}

#[test]
fn test_partial_target_keeps_unit_defaults() {
    let target: TargetConfig = toml::from_str(r#"url = "https://example.com/units""#).unwrap();
    assert_eq!(target.url, "https://example.com/units");
    assert_eq!(target.one_bedroom, default_one_bedroom());
    assert_eq!(target.two_bedroom, default_two_bedroom());
}

#[test]
fn test_config_serialize_roundtrip_through_json() {
    let config = WatchConfig::default();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["target"]["expected_phrase"], "get notified");
    assert_eq!(json["state"]["failure_counter"], "count.json");
}
