//! 유출된 자격 증명 (시크릿)

use std::fmt;
use std::time::SystemTime;

use crate::model::digest::Digest;
use crate::payload::Payload;

/// 자격 증명 값 (타입 소거)
///
/// 구체 타입은 [`crate::credential`]의 종류 중 하나이며,
/// 패키지 메타데이터와는 별도의 레지스트리로 변환됩니다.
pub struct SecretValue(Box<dyn Payload>);

impl SecretValue {
    /// 구체 자격 증명 값을 감쌉니다.
    pub fn new<T: Payload>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// 이미 박싱된 페이로드를 감쌉니다 (코덱 디코딩 경로).
    pub fn from_boxed(value: Box<dyn Payload>) -> Self {
        Self(value)
    }

    /// 구체 타입으로 다운캐스트합니다.
    pub fn downcast_ref<T: Payload>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// 내부 페이로드 참조
    pub fn as_payload(&self) -> &dyn Payload {
        self.0.as_ref()
    }

    /// 구체 타입 이름
    pub fn type_name(&self) -> &'static str {
        self.0.payload_type_name()
    }
}

impl Clone for SecretValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_boxed())
    }
}

impl PartialEq for SecretValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 자격 증명 원문은 로그에 남기지 않음
        write!(f, "SecretValue({})", self.0.payload_type_name())
    }
}

/// 자격 증명 유효성 검사 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    #[default]
    Unspecified,
    /// 해당 종류는 검사를 지원하지 않음
    Unsupported,
    /// 검사 과정에서 오류 발생
    Failed,
    /// 무효 (폐기되었거나 잘못된 값)
    Invalid,
    /// 유효한 자격 증명
    Valid,
}

/// 유효성 검사 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    /// 마지막 검사 시각
    pub at: Option<SystemTime>,
}

/// 레이어 상세 정보 (시크릿이 컨테이너 레이어 안의 파일에서 발견된 경우)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerDetails {
    pub index: u32,
    pub diff_id: Option<Digest>,
    pub chain_id: Option<Digest>,
    pub command: String,
    pub in_base_image: bool,
}

/// 시크릿이 발견된 위치 (정확히 하나)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretLocation {
    /// 파일 경로
    Filepath(String),
    /// 환경변수 이름
    EnvironmentVariable(String),
    /// 컨테이너 실행 명령
    ContainerCommand(String),
    /// 레이어 정보가 있는 파일 경로
    FilepathWithLayerDetails { path: String, layer: LayerDetails },
}

/// 유출된 자격 증명
#[derive(Debug, Clone, PartialEq)]
pub struct Secret {
    /// 자격 증명 값
    pub value: SecretValue,
    /// 유효성 검사 결과
    pub validation: ValidationResult,
    /// 발견 위치
    pub location: SecretLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Token {
        value: String,
    }

    #[test]
    fn secret_value_debug_hides_contents() {
        let value = SecretValue::new(Token {
            value: "ghp_supersecret".to_owned(),
        });
        let rendered = format!("{value:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("Token"));
    }

    #[test]
    fn secret_value_equality_is_by_value() {
        let a = SecretValue::new(Token {
            value: "x".to_owned(),
        });
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.downcast_ref::<Token>().unwrap().value, "x");
    }
}
