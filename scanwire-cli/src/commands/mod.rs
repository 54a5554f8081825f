//! Command handlers -- one module per subcommand

pub mod config;
pub mod convert;
pub mod inspect;

use std::path::Path;

use tracing::debug;

use scanwire_core::config::ScanwireConfig;
use scanwire_core::error::{ConfigError, ScanwireError};

/// Load the configuration file, falling back to defaults when it does not exist.
///
/// Environment overrides and validation apply in both cases, so a missing
/// `scanwire.toml` still honours `SCANWIRE_OUTPUT_FORMAT` and friends.
pub async fn load_config(config_path: &Path) -> Result<ScanwireConfig, ScanwireError> {
    match ScanwireConfig::load(config_path).await {
        Err(ScanwireError::Config(ConfigError::FileNotFound { path })) => {
            debug!(path, "config file not found, using defaults");
            let mut config = ScanwireConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/scanwire.toml"))
            .await
            .expect("missing config should fall back to defaults");
        assert_eq!(config.general.log_level, "info");
    }

    #[tokio::test]
    async fn test_load_config_malformed_file_fails() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("scanwire.toml");
        std::fs::write(&path, "[output\nformat = 1").expect("should write config");

        let err = load_config(&path).await.expect_err("malformed config should fail");
        assert!(matches!(
            err,
            ScanwireError::Config(ConfigError::ParseFailed { .. })
        ));
    }
}
