//! 스캔 인벤토리 도메인 모델
//!
//! 스캔 한 번이 만들어 내는 결과 그래프입니다. 생성 후에는 불변이며,
//! 와이어 메시지는 이 그래프의 특정 시점 투영입니다.
//!
//! 그래프 관계는 포인터 대신 다음과 같이 표현합니다.
//! - 패키지 ↔ 취약점: `Arc<Package>` 공유 (인벤토리 목록과 같은 할당)
//! - 패키지 → 레이어: [`LayerRef`] (컨테이너 인덱스, 레이어 인덱스)
//! - 레이어 → 컨테이너: [`LayerMetadata::parent_container`] (컨테이너 인덱스)

mod container;
mod digest;
mod finding;
mod inventory;
mod package;
mod secret;
mod vex;

pub use container::{BaseImageChain, BaseImageDetails, ContainerImageMetadata, LayerMetadata};
pub use digest::Digest;
pub use finding::{
    Advisory, AdvisoryId, AdvisoryType, Cvss, GenericFinding, PackageVuln, Severity,
    SeverityLevel, TargetDetails, VulnSeverity, Vulnerability,
};
pub use inventory::{Inventory, PluginStatus, ScanResult, ScanState, ScanStatus};
pub use package::{Annotation, LayerRef, Metadata, Package, SourceCodeIdentifier};
pub use secret::{
    LayerDetails, Secret, SecretLocation, SecretValue, ValidationResult, ValidationStatus,
};
pub use vex::{FindingExploitabilitySignal, Justification, PackageExploitabilitySignal};
