// Config loading and validation tests

use callstats::config::AppConfig;
use callstats::models::Category;

const VALID_CONFIG: &str = r#"
[stats]
gap_threshold_ms = 15000
max_rate_bps = 500000000
min_interval_secs = 0.01
default_connection_id = "pc-default"
rate_fields = ["bytesSent"]

[timeline]
width = 800
left_margin = 120
track_height = 24
track_spacing = 8

[filters]
bwe_issue = true
ice_restart = false
join = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.stats.gap_threshold_ms, 15_000);
    assert_eq!(config.stats.max_rate_bps, 500_000_000.0);
    assert_eq!(config.stats.default_connection_id, "pc-default");
    assert_eq!(config.stats.rate_fields, vec!["bytesSent".to_string()]);
    assert_eq!(config.timeline.width, 800.0);
    assert_eq!(config.timeline.track_height, 24.0);
    assert!(config.filters.enabled(Category::BweIssue));
    assert!(!config.filters.enabled(Category::IceRestart));
    assert!(!config.filters.enabled(Category::Screenshare));
}

#[test]
fn test_config_defaults_when_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config is valid");
    assert_eq!(config.stats.gap_threshold_ms, 20_000);
    assert_eq!(config.stats.max_rate_bps, 1_000_000_000.0);
    assert_eq!(config.stats.min_interval_secs, 0.001);
    assert_eq!(config.stats.default_connection_id, "default");
    assert!(config.stats.is_rate_field("bytesReceived"));
    assert!(config.stats.is_step_field("frameHeight"));
    assert!(config.stats.is_descriptor_type("remote-candidate"));
    assert!(config.stats.is_visible_by_default("bytesSent_in_bits/s"));
    assert!(!config.stats.is_visible_by_default("packetsSent"));
    assert_eq!(config.timeline.left_margin, 150.0);
    for category in Category::ALL {
        assert!(config.filters.enabled(category));
    }
}

#[test]
fn test_config_validation_rejects_zero_gap_threshold() {
    let bad = VALID_CONFIG.replace("gap_threshold_ms = 15000", "gap_threshold_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("gap_threshold_ms"));
}

#[test]
fn test_config_validation_rejects_zero_rate_ceiling() {
    let bad = VALID_CONFIG.replace("max_rate_bps = 500000000", "max_rate_bps = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_rate_bps"));
}

#[test]
fn test_config_validation_rejects_negative_min_interval() {
    let bad = VALID_CONFIG.replace("min_interval_secs = 0.01", "min_interval_secs = -1.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("min_interval_secs"));
}

#[test]
fn test_config_validation_rejects_empty_default_connection() {
    let bad = VALID_CONFIG.replace(
        "default_connection_id = \"pc-default\"",
        "default_connection_id = \"\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("default_connection_id"));
}

#[test]
fn test_config_validation_rejects_zero_width() {
    let bad = VALID_CONFIG.replace("width = 800", "width = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("timeline.width"));
}

#[test]
fn test_config_validation_rejects_zero_track_height() {
    let bad = VALID_CONFIG.replace("track_height = 24", "track_height = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("track_height"));
}

#[test]
fn test_config_rejects_unknown_filter_category() {
    let bad = format!("{}\nbogus = true\n", VALID_CONFIG);
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("callstats.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    let fallback = AppConfig::load_or_default();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.stats.gap_threshold_ms, 15_000);
    assert_eq!(fallback.expect("load_or_default honors CONFIG_FILE").timeline.width, 800.0);
}
