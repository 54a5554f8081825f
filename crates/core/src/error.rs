//! 에러 타입 — 도메인별 에러 정의

/// scanwire 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum ScanwireError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 도메인 모델 값 에러
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// 와이어 포맷 변환 에러
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 도메인 모델 값 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// 형식이 잘못된 콘텐츠 다이제스트
    #[error("invalid digest '{value}': {reason}")]
    InvalidDigest { value: String, reason: String },
}

/// 와이어 포맷 변환 에러
///
/// 코덱 크레이트의 상세 에러가 이 분류로 변환됩니다.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// 도메인 -> 와이어 변환 거부 (구조적 불변식 위반)
    #[error("encode rejected: {0}")]
    Encode(String),

    /// 와이어 바이트 디코딩 실패
    #[error("decode failed: {0}")]
    Decode(String),

    /// 출력/입력 파일 형식 문제
    #[error("format error: {0}")]
    Format(String),

    /// 코덱 초기화 실패 (레지스트리/테이블 구성 오류)
    #[error("codec init failed: {0}")]
    Init(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_to_scanwire_error() {
        let err: ScanwireError = ConfigError::ParseFailed {
            reason: "bad toml".to_owned(),
        }
        .into();
        assert!(matches!(err, ScanwireError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn model_error_display() {
        let err = ModelError::InvalidDigest {
            value: "md5:abc".to_owned(),
            reason: "unsupported algorithm".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid digest 'md5:abc': unsupported algorithm"
        );
    }

    #[test]
    fn wire_error_display() {
        let err: ScanwireError = WireError::Format("bad extension".to_owned()).into();
        assert_eq!(err.to_string(), "wire error: format error: bad extension");
    }

    #[test]
    fn io_error_converts_to_scanwire_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ScanwireError = io.into();
        assert!(matches!(err, ScanwireError::Io(_)));
    }
}
