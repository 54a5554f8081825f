//! scanwire.toml 통합 설정 테스트
//!
//! - scanwire.toml.example 파싱 테스트
//! - 부분 설정 (일부 섹션만) 로딩 테스트
//! - 환경변수 우선순위 테스트
//! - 빈 파일 / 잘못된 형식 에러 테스트

use scanwire_core::config::ScanwireConfig;
use scanwire_core::error::{ConfigError, ScanwireError};

// =============================================================================
// scanwire.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_parses_successfully() {
    let content = include_str!("../../../scanwire.toml.example");
    let config = ScanwireConfig::parse(content).expect("example config should parse");

    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.general.log_format, "json");
    assert_eq!(config.output.format, "textproto");
    assert!(!config.output.gzip);
}

#[test]
fn example_config_passes_validation() {
    let content = include_str!("../../../scanwire.toml.example");
    let config = ScanwireConfig::parse(content).expect("should parse");
    config
        .validate()
        .expect("example config should pass validation");
}

#[test]
fn example_config_matches_code_defaults() {
    let content = include_str!("../../../scanwire.toml.example");
    let from_file = ScanwireConfig::parse(content).expect("should parse");
    let defaults = ScanwireConfig::default();

    assert_eq!(from_file.general.log_level, defaults.general.log_level);
    assert_eq!(from_file.general.log_format, defaults.general.log_format);
    assert_eq!(from_file.output.format, defaults.output.format);
    assert_eq!(from_file.output.gzip, defaults.output.gzip);
}

// =============================================================================
// 부분 설정 로딩 테스트
// =============================================================================

#[test]
fn partial_config_general_only() {
    let toml = r#"
[general]
log_level = "warn"
"#;
    let config = ScanwireConfig::parse(toml).expect("should parse");
    assert_eq!(config.general.log_level, "warn");
    // 나머지는 기본값
    assert_eq!(config.general.log_format, "json");
    assert_eq!(config.output.format, "textproto");
}

#[test]
fn partial_config_output_only() {
    let toml = r#"
[output]
gzip = true
"#;
    let config = ScanwireConfig::parse(toml).expect("should parse");
    assert!(config.output.gzip);
    assert_eq!(config.output.format, "textproto");
    assert_eq!(config.general.log_level, "info");
}

// =============================================================================
// 환경변수 우선순위 테스트
// =============================================================================

#[test]
#[serial_test::serial]
fn env_override_takes_precedence_over_toml() {
    let toml = r#"
[general]
log_level = "info"
"#;

    let original = std::env::var("SCANWIRE_GENERAL_LOG_LEVEL").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("SCANWIRE_GENERAL_LOG_LEVEL", "error");
    }

    let mut config = ScanwireConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();
    let result = config.general.log_level.clone();

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("SCANWIRE_GENERAL_LOG_LEVEL", val),
            None => std::env::remove_var("SCANWIRE_GENERAL_LOG_LEVEL"),
        }
    }

    assert_eq!(result, "error");
}

#[test]
#[serial_test::serial]
fn env_override_output_format_and_gzip() {
    let original_format = std::env::var("SCANWIRE_OUTPUT_FORMAT").ok();
    let original_gzip = std::env::var("SCANWIRE_OUTPUT_GZIP").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("SCANWIRE_OUTPUT_FORMAT", "binproto");
        std::env::set_var("SCANWIRE_OUTPUT_GZIP", "true");
    }

    let mut config = ScanwireConfig::default();
    config.apply_env_overrides();
    let format = config.output.format.clone();
    let gzip = config.output.gzip;

    // SAFETY: 테스트 정리
    unsafe {
        match original_format {
            Some(val) => std::env::set_var("SCANWIRE_OUTPUT_FORMAT", val),
            None => std::env::remove_var("SCANWIRE_OUTPUT_FORMAT"),
        }
        match original_gzip {
            Some(val) => std::env::set_var("SCANWIRE_OUTPUT_GZIP", val),
            None => std::env::remove_var("SCANWIRE_OUTPUT_GZIP"),
        }
    }

    assert_eq!(format, "binproto");
    assert!(gzip);
}

#[test]
#[serial_test::serial]
fn env_override_invalid_bool_keeps_toml_value() {
    let toml = r#"
[output]
gzip = true
"#;
    let original = std::env::var("SCANWIRE_OUTPUT_GZIP").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("SCANWIRE_OUTPUT_GZIP", "yes please");
    }

    let mut config = ScanwireConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();
    let gzip = config.output.gzip;

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("SCANWIRE_OUTPUT_GZIP", val),
            None => std::env::remove_var("SCANWIRE_OUTPUT_GZIP"),
        }
    }

    assert!(gzip);
}

// =============================================================================
// 빈 파일 / 잘못된 형식 에러 테스트
// =============================================================================

#[test]
fn empty_string_parses_with_defaults() {
    let config = ScanwireConfig::parse("").expect("empty should parse");
    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.output.format, "textproto");
}

#[test]
fn comments_only_parses_with_defaults() {
    let toml = "# only comments\n# nothing else\n";
    let config = ScanwireConfig::parse(toml).expect("should parse");
    assert_eq!(config.general.log_format, "json");
}

#[test]
fn malformed_toml_returns_parse_error() {
    let result = ScanwireConfig::parse("[general\nlog_level = ");
    assert!(matches!(
        result.unwrap_err(),
        ScanwireError::Config(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn wrong_type_for_bool_field() {
    let toml = r#"
[output]
gzip = "sometimes"
"#;
    let result = ScanwireConfig::parse(toml);
    assert!(matches!(
        result.unwrap_err(),
        ScanwireError::Config(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn unknown_section_is_ignored() {
    let toml = r#"
[general]
log_level = "debug"

[future_section]
key = "value"
"#;
    let config = ScanwireConfig::parse(toml).expect("unknown sections should be ignored");
    assert_eq!(config.general.log_level, "debug");
}

#[tokio::test]
async fn from_file_nonexistent_returns_file_not_found() {
    let result = ScanwireConfig::from_file("/tmp/scanwire_test_nonexistent_12345.toml").await;
    assert!(matches!(
        result.unwrap_err(),
        ScanwireError::Config(ConfigError::FileNotFound { .. })
    ));
}

#[tokio::test]
async fn from_file_rejects_invalid_output_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scanwire.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").expect("write");

    let result = ScanwireConfig::from_file(&path).await;
    assert!(matches!(
        result.unwrap_err(),
        ScanwireError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[tokio::test]
async fn load_example_config_from_disk() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let example_path = format!("{}/../../scanwire.toml.example", manifest_dir);

    let config = ScanwireConfig::from_file(&example_path)
        .await
        .expect("example config should load");
    config.validate().expect("loaded example should validate");
    assert_eq!(config.general.log_level, "info");
}

// =============================================================================
// 직렬화 라운드트립 테스트
// =============================================================================

#[test]
fn serialize_and_reparse_roundtrip() {
    let mut original = ScanwireConfig::default();
    original.general.log_level = "trace".to_owned();
    original.output.format = "binproto".to_owned();

    let toml_str = toml::to_string_pretty(&original).expect("should serialize");
    let reparsed = ScanwireConfig::parse(&toml_str).expect("should reparse");

    assert_eq!(reparsed.general.log_level, "trace");
    assert_eq!(reparsed.output.format, "binproto");
}
