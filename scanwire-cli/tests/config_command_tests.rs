//! Integration tests for `scanwire config`.
//!
//! Exercises config loading with real TOML files.

use std::fs;
use tempfile::TempDir;

use scanwire_core::config::ScanwireConfig;

#[tokio::test]
async fn test_config_validate_valid_toml() {
    // Given: A valid config file
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("scanwire.toml");

    let valid_config = r#"
[general]
log_level = "info"
log_format = "json"

[output]
format = "textproto"
gzip = false
"#;

    fs::write(&config_path, valid_config).expect("should write config");

    // When: Loading the config
    let result = ScanwireConfig::load(&config_path).await;

    // Then: Should succeed
    assert!(result.is_ok(), "valid config should load successfully");
}

#[tokio::test]
async fn test_config_validate_malformed_toml() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("bad.toml");

    fs::write(&config_path, "[general\nlog_level = \"info\"\n").expect("should write bad config");

    let result = ScanwireConfig::load(&config_path).await;
    assert!(result.is_err(), "malformed TOML should fail to load");
}

#[tokio::test]
async fn test_config_validate_missing_file() {
    let config_path = std::path::PathBuf::from("/nonexistent/scanwire.toml");

    let result = ScanwireConfig::load(&config_path).await;
    assert!(result.is_err(), "missing file should fail to load");
}

#[tokio::test]
async fn test_config_validate_empty_file() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "").expect("should write empty file");

    let config = ScanwireConfig::load(&config_path)
        .await
        .expect("empty config should use defaults");
    assert_eq!(config.output.format, "textproto");
    assert!(!config.output.gzip, "gzip should be off by default");
}

#[tokio::test]
async fn test_config_unknown_output_format_is_invalid() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("scanwire.toml");
    fs::write(&config_path, "[output]\nformat = \"jsonproto\"\n").expect("should write config");

    let err = ScanwireConfig::load(&config_path)
        .await
        .expect_err("unknown output format should be rejected");
    assert!(err.to_string().contains("output.format"));
}

#[tokio::test]
async fn test_config_unicode_values() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("설정.toml");

    let unicode_config = r#"
# 한글 주석
[general]
log_level = "warn"

[output]
format = "binproto"
gzip = true
"#;

    fs::write(&config_path, unicode_config).expect("should write unicode config");

    let config = ScanwireConfig::load(&config_path)
        .await
        .expect("unicode path and comments should load");
    assert_eq!(config.general.log_level, "warn");
    assert_eq!(config.output.extension(), "binproto.gz");
}
