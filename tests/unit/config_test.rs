//! Tests for engine configuration

use std::fs;

use chrono::FixedOffset;
use levelup::config::{EngineConfig, GlobalConfig};
use levelup::paths::CONFIG_ENV;
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert_eq!(config.engine.utc_offset_minutes, 0);
    assert!(config.engine.enforce_max_points);

    let settings = config.engine.settings().unwrap();
    assert_eq!(settings.zone, FixedOffset::east_opt(0).unwrap());
}

#[test]
fn test_config_empty_file_uses_defaults() {
    let config = GlobalConfig::parse("").unwrap();
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_config_parses_engine_section() {
    let config = GlobalConfig::parse(
        r"
[engine]
utc_offset_minutes = -300
enforce_max_points = false
",
    )
    .unwrap();

    let settings = config.engine.settings().unwrap();
    assert_eq!(settings.zone, FixedOffset::west_opt(5 * 3600).unwrap());
    assert!(!settings.enforce_max_points);
}

#[test]
fn test_config_rejects_out_of_range_offset() {
    let engine = EngineConfig {
        utc_offset_minutes: 24 * 60,
        ..EngineConfig::default()
    };
    assert!(engine.settings().is_err());
    assert!(GlobalConfig::parse("[engine]\nutc_offset_minutes = 5000\n").is_err());
}

#[test]
fn test_config_rejects_malformed_toml() {
    assert!(GlobalConfig::parse("[engine\n").is_err());
}

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_config_save_and_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("levelup.toml");

    let mut config = GlobalConfig::default();
    config.engine.utc_offset_minutes = 120;
    config.save(&path).unwrap();

    let loaded = GlobalConfig::load(Some(&path)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");
    assert!(GlobalConfig::load(Some(&missing)).is_err());
}

#[test]
#[serial]
fn test_config_env_var_points_at_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.toml");
    fs::write(&path, "[engine]\nutc_offset_minutes = 60\n").unwrap();

    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let loaded = GlobalConfig::load(None);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(loaded.unwrap().engine.utc_offset_minutes, 60);
}

#[test]
#[serial]
fn test_config_env_var_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let loaded = GlobalConfig::load(None);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(loaded.unwrap(), GlobalConfig::default());
}
