//! 코덱 에러 타입
//!
//! [`CodecError`]는 인코딩/디코딩/파일 입출력 중 발생할 수 있는 모든 에러를 나타냅니다.
//! `From<CodecError> for ScanwireError` 구현을 통해 `?` 연산자로
//! 상위 에러 타입으로 전파됩니다.
//!
//! # 에러 카테고리
//!
//! - **구조적 거부 (인코딩)**: `AdvisoryMissing`, `AdvisoryIdMissing`,
//!   `VulnIdentifiersAndMatchesAllSet`, `PackageNotFound`, `UnregisteredType`
//! - **개별 값 거부 (디코딩)**: `SecretLocationCount`, `SecretKindMissing`,
//!   `PackageIdUnresolved` (인벤토리 디코딩에서는 로그 후 해당 값만 버림)
//! - **파일 형식**: `InvalidFilename`, `UnknownFormat`
//! - **마샬링**: `Encode`, `Decode`
//! - **파일 I/O**: `Io`
//! - **초기화**: `Registry`, `Table`, `Schema`

use scanwire_core::error::{ScanwireError, WireError};

/// 코덱 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// 일반 탐지 결과에 권고가 없음
    #[error("generic finding has no advisory")]
    AdvisoryMissing,

    /// 권고에 식별자가 없음
    #[error("advisory has no id")]
    AdvisoryIdMissing,

    /// VEX 신호에 취약점 식별자와 전체 일치가 동시에 설정됨
    #[error("exploitability signal from '{plugin}' sets both vuln identifiers and matches-all")]
    VulnIdentifiersAndMatchesAllSet {
        /// 신호를 생성한 플러그인
        plugin: String,
    },

    /// 취약점이 가리키는 패키지가 인벤토리 패키지 목록에 없음
    #[error("package {name}@{version} referenced by a vulnerability is not in the inventory")]
    PackageNotFound {
        /// 패키지 이름
        name: String,
        /// 패키지 버전
        version: String,
    },

    /// 레지스트리에 등록되지 않은 도메인 타입
    #[error("no {registry} converter registered for type {type_name}")]
    UnregisteredType {
        /// 레지스트리 이름 (metadata, secret)
        registry: &'static str,
        /// 도메인 타입 이름
        type_name: &'static str,
    },

    /// 시크릿 위치 개수가 1이 아님
    #[error("secret must have exactly one location, found {found}")]
    SecretLocationCount {
        /// 실제 위치 개수
        found: usize,
    },

    /// 시크릿 자격 증명 값이 없거나 알 수 없는 종류
    #[error("secret has no recognizable credential value")]
    SecretKindMissing,

    /// 취약점의 패키지 식별자를 해석할 수 없음
    #[error("package id '{id}' does not resolve to a decoded package")]
    PackageIdUnresolved {
        /// 패키지 식별자 (빈 문자열일 수 있음)
        id: String,
    },

    /// 출력 파일 이름에서 형식을 알 수 없음
    #[error("invalid filename {path}: {reason}")]
    InvalidFilename {
        /// 파일 경로
        path: String,
        /// 거부 사유
        reason: String,
    },

    /// 알 수 없는 형식 이름
    #[error("unknown output format '{format}' (expected textproto or binproto)")]
    UnknownFormat {
        /// 지정된 형식 이름
        format: String,
    },

    /// 메시지 마샬링 실패
    #[error("encode failed: {0}")]
    Encode(String),

    /// 메시지 언마샬링 실패
    #[error("decode failed: {0}")]
    Decode(String),

    /// 파일 I/O 에러
    #[error("io error: {path}: {source}")]
    Io {
        /// 관련 파일 경로
        path: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },

    /// 레지스트리 구성 에러
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// enum 테이블 구성 에러
    #[error(transparent)]
    Table(#[from] TableError),

    /// 내장 텍스트 형식 디스크립터를 읽을 수 없음
    #[error("wire schema unavailable: {0}")]
    Schema(String),
}

impl CodecError {
    /// 메트릭 레이블에 쓰이는 짧은 사유 이름
    pub fn reason(&self) -> &'static str {
        match self {
            Self::AdvisoryMissing => "advisory_missing",
            Self::AdvisoryIdMissing => "advisory_id_missing",
            Self::VulnIdentifiersAndMatchesAllSet { .. } => "vuln_filter_conflict",
            Self::PackageNotFound { .. } => "package_not_found",
            Self::UnregisteredType { .. } => "unregistered_type",
            Self::SecretLocationCount { .. } => "secret_location_count",
            Self::SecretKindMissing => "secret_kind_missing",
            Self::PackageIdUnresolved { .. } => "package_id_unresolved",
            Self::InvalidFilename { .. } => "invalid_filename",
            Self::UnknownFormat { .. } => "unknown_format",
            Self::Encode(_) => "encode",
            Self::Decode(_) => "decode",
            Self::Io { .. } => "io",
            Self::Registry(_) => "registry",
            Self::Table(_) => "table",
            Self::Schema(_) => "schema",
        }
    }
}

/// 레지스트리 등록 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// 와이어 변형이 이미 등록됨
    #[error("{registry} registry: wire variant '{variant}' is already registered")]
    DuplicateWireVariant {
        registry: &'static str,
        variant: &'static str,
    },

    /// 도메인 타입이 이미 등록됨
    #[error("{registry} registry: domain type {type_name} is already registered")]
    DuplicateDomainType {
        registry: &'static str,
        type_name: &'static str,
    },
}

/// enum 테이블 구성 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// 같은 도메인 값이 두 번 나열됨
    #[error("{table} table: domain value {value} is listed more than once")]
    DuplicateDomainValue { table: &'static str, value: String },

    /// 서로 다른 도메인 값이 같은 와이어 값으로 매핑되어 역방향 테이블이 줄어듦
    #[error("{table} table: {forward} forward entries collapse to {reverse} reverse entries")]
    CollapsedEntries {
        table: &'static str,
        forward: usize,
        reverse: usize,
    },
}

impl From<CodecError> for ScanwireError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io { source, .. } => ScanwireError::Io(source),
            CodecError::InvalidFilename { .. } | CodecError::UnknownFormat { .. } => {
                ScanwireError::Wire(WireError::Format(err.to_string()))
            }
            CodecError::Decode(msg) => ScanwireError::Wire(WireError::Decode(msg)),
            CodecError::SecretLocationCount { .. }
            | CodecError::SecretKindMissing
            | CodecError::PackageIdUnresolved { .. } => {
                ScanwireError::Wire(WireError::Decode(err.to_string()))
            }
            CodecError::Registry(_) | CodecError::Table(_) | CodecError::Schema(_) => {
                ScanwireError::Wire(WireError::Init(err.to_string()))
            }
            CodecError::Encode(msg) => ScanwireError::Wire(WireError::Encode(msg)),
            CodecError::AdvisoryMissing
            | CodecError::AdvisoryIdMissing
            | CodecError::VulnIdentifiersAndMatchesAllSet { .. }
            | CodecError::PackageNotFound { .. }
            | CodecError::UnregisteredType { .. } => {
                ScanwireError::Wire(WireError::Encode(err.to_string()))
            }
        }
    }
}
