//! 인벤토리와 스캔 결과

use std::sync::Arc;
use std::time::SystemTime;

use crate::model::container::{ContainerImageMetadata, LayerMetadata};
use crate::model::finding::{GenericFinding, PackageVuln};
use crate::model::package::{LayerRef, Package};
use crate::model::secret::Secret;

/// 스캔에서 수집한 모든 결과
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub packages: Vec<Arc<Package>>,
    pub package_vulns: Vec<PackageVuln>,
    pub generic_findings: Vec<GenericFinding>,
    pub secrets: Vec<Secret>,
    pub container_image_metadata: Vec<ContainerImageMetadata>,
}

impl Inventory {
    /// 모든 컬렉션이 비어 있으면 `true`
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
            && self.package_vulns.is_empty()
            && self.generic_findings.is_empty()
            && self.secrets.is_empty()
            && self.container_image_metadata.is_empty()
    }

    /// 컨테이너 메타데이터를 추가하고 인덱스를 반환합니다.
    ///
    /// 컨테이너의 `index`와 각 레이어의 `parent_container`를
    /// 추가되는 위치로 맞춥니다.
    pub fn add_container(&mut self, mut container: ContainerImageMetadata) -> usize {
        let index = self.container_image_metadata.len();
        container.index = index;
        for layer in &mut container.layer_metadata {
            layer.parent_container = Some(index);
        }
        self.container_image_metadata.push(container);
        index
    }

    /// 레이어 참조로 레이어를 조회합니다.
    pub fn layer(&self, layer_ref: LayerRef) -> Option<&LayerMetadata> {
        self.container_image_metadata
            .get(layer_ref.container_index)?
            .layer(layer_ref.layer_index)
    }

    /// 레이어를 소유한 컨테이너를 조회합니다.
    pub fn parent_container(&self, layer: &LayerMetadata) -> Option<&ContainerImageMetadata> {
        self.container_image_metadata.get(layer.parent_container?)
    }

    /// 패키지가 속한 레이어를 조회합니다.
    pub fn package_layer(&self, package: &Package) -> Option<&LayerMetadata> {
        self.layer(package.layer?)
    }

    /// 주어진 레이어에 속한 패키지를 순회합니다.
    pub fn packages_in_layer(&self, layer_ref: LayerRef) -> impl Iterator<Item = &Arc<Package>> {
        self.packages
            .iter()
            .filter(move |pkg| pkg.layer == Some(layer_ref))
    }

    /// 주어진 패키지(같은 할당)를 가리키는 취약점을 순회합니다.
    pub fn vulns_for<'a>(
        &'a self,
        package: &'a Arc<Package>,
    ) -> impl Iterator<Item = &'a PackageVuln> + 'a {
        self.package_vulns
            .iter()
            .filter(move |vuln| Arc::ptr_eq(&vuln.package, package))
    }
}

/// 스캔 전체 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    #[default]
    Unspecified,
    Succeeded,
    PartiallySucceeded,
    Failed,
}

/// 스캔 상태와 실패 사유
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatus {
    pub state: ScanState,
    pub failure_reason: String,
}

impl ScanStatus {
    /// 성공 상태
    pub fn succeeded() -> Self {
        Self {
            state: ScanState::Succeeded,
            failure_reason: String::new(),
        }
    }

    /// 실패 상태
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            state: ScanState::Failed,
            failure_reason: reason.into(),
        }
    }
}

/// 플러그인별 실행 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginStatus {
    pub name: String,
    pub version: u32,
    pub status: ScanStatus,
}

/// 스캔 한 번의 최종 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// 스캐너 버전
    pub version: String,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
    pub status: ScanStatus,
    pub plugin_status: Vec<PluginStatus>,
    pub inventory: Inventory,
}

impl ScanResult {
    /// 시작/종료 시각이 모두 Unix epoch인 빈 결과를 만듭니다.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            start_time: SystemTime::UNIX_EPOCH,
            end_time: SystemTime::UNIX_EPOCH,
            status: ScanStatus::default(),
            plugin_status: Vec::new(),
            inventory: Inventory::default(),
        }
    }
}
