use std::fs;

use tempfile::tempdir;

use crate::config::{ConfigError, HostConfig};

#[test]
fn load_missing_file_returns_defaults() {
    let dir = tempdir().expect("tempdir failed");
    let path = dir.path().join("stronghold.toml");

    let config = HostConfig::load(&path).expect("load failed");
    assert_eq!(config, HostConfig::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("tempdir failed");
    let path = dir.path().join("stronghold.toml");

    let config = HostConfig {
        disabled_modules: vec!["dungeons".to_string(), "markets".to_string()],
        log_filter: Some("stronghold_core=debug".to_string()),
    };
    config.save(&path).expect("save failed");

    let loaded = HostConfig::load(&path).expect("load failed");
    assert_eq!(loaded, config);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir failed");
    let path = dir.path().join("stronghold.toml");
    fs::write(&path, "disabled_modules = not-a-list").expect("write failed");

    let err = HostConfig::load(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir failed");
    let path = dir.path().join("stronghold.toml");
    fs::write(&path, "disabled_modules = [\"mobs\"]\n").expect("write failed");

    let config = HostConfig::load(&path).expect("load failed");
    assert!(config.is_module_disabled("mobs"));
    assert!(!config.is_module_disabled("quests"));
    assert_eq!(config.log_filter, None);
}
