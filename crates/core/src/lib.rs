#![doc = include_str!("../README.md")]

pub mod config;
pub mod credential;
pub mod error;
pub mod metadata;
pub mod metrics;
pub mod model;
pub mod payload;
pub mod purl;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ConfigError, ModelError, ScanwireError, WireError};

// 설정
pub use config::ScanwireConfig;

// 페이로드
pub use payload::Payload;

// 도메인 모델
pub use model::{
    Advisory, AdvisoryId, AdvisoryType, Annotation, BaseImageChain, BaseImageDetails,
    ContainerImageMetadata, Cvss, Digest, FindingExploitabilitySignal, GenericFinding, Inventory,
    Justification, LayerDetails, LayerMetadata, LayerRef, Metadata, Package,
    PackageExploitabilitySignal, PackageVuln, PluginStatus, ScanResult, ScanState, ScanStatus,
    Secret, SecretLocation, SecretValue, Severity, SeverityLevel, SourceCodeIdentifier,
    TargetDetails, ValidationResult, ValidationStatus, VulnSeverity, Vulnerability,
};

// Package URL
pub use purl::PackageUrl;
