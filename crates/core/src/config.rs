//! 설정 관리 — scanwire.toml 파싱 및 런타임 설정
//!
//! [`ScanwireConfig`]는 CLI와 라이브러리 사용자가 공유하는 최상위 설정 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`SCANWIRE_OUTPUT_FORMAT=binproto` 형식)
//! 3. 설정 파일 (`scanwire.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), scanwire_core::error::ScanwireError> {
//! use scanwire_core::config::ScanwireConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = ScanwireConfig::load("scanwire.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = ScanwireConfig::parse("[output]\nformat = \"binproto\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ScanwireError};

/// 허용되는 출력 형식 이름
pub const OUTPUT_FORMATS: [&str; 2] = ["textproto", "binproto"];

/// scanwire 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanwireConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 결과 파일 출력 설정
    #[serde(default)]
    pub output: OutputConfig,
}

impl ScanwireConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    /// 3. 유효성 검증
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ScanwireError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ScanwireError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanwireError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                ScanwireError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, ScanwireError> {
        toml::from_str(toml_str).map_err(|e| {
            ScanwireError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `SCANWIRE_{SECTION}_{FIELD}`
    /// 예: `SCANWIRE_OUTPUT_GZIP=true`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "SCANWIRE_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "SCANWIRE_GENERAL_LOG_FORMAT");

        // Output
        override_string(&mut self.output.format, "SCANWIRE_OUTPUT_FORMAT");
        override_bool(&mut self.output.gzip, "SCANWIRE_OUTPUT_GZIP");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), ScanwireError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        // output.format 검증
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "output.format".to_owned(),
                reason: format!("must be one of: {}", OUTPUT_FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// 결과 파일 출력 설정
///
/// 출력 경로의 확장자가 형식을 결정하는 경우(`write`)에는 사용되지 않고,
/// 형식을 명시적으로 지정하는 경우(`write_with_format`)에만 적용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 출력 형식 (textproto, binproto)
    pub format: String,
    /// gzip 압축 여부 (확장자에 `.gz` 추가)
    pub gzip: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "textproto".to_owned(),
            gzip: false,
        }
    }
}

impl OutputConfig {
    /// 설정된 형식에 해당하는 파일 확장자를 반환합니다 (예: `textproto.gz`).
    pub fn extension(&self) -> String {
        if self.gzip {
            format!("{}.gz", self.format)
        } else {
            self.format.clone()
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}
