//! 인벤토리 코덱 — 도메인 스캔 결과 ↔ 와이어 메시지
//!
//! [`InventoryCodec`]은 메타데이터/시크릿 레지스트리와 enum 테이블을 묶어
//! 스캔 결과 전체를 와이어 메시지로 변환하고 다시 복원합니다.
//!
//! # 인코딩
//! 구조적으로 표현할 수 없는 값(권고 없는 탐지 결과, 인벤토리에 없는 패키지를
//! 가리키는 취약점 등)은 [`CodecError`]로 거부합니다.
//!
//! # 디코딩
//! 디코딩은 실패하지 않습니다. 해석할 수 없는 개별 값은 경고 로그와 함께
//! 버리거나 "없음"으로 대체하고 `scanwire_codec_decode_degraded_total`에 집계합니다.
//!
//! # 디코딩 순서
//! 1. 컨테이너 메타데이터 (레이어의 소유 컨테이너 역참조 복원)
//! 2. 패키지 (레이어 인덱스 쌍을 1의 결과로 검증)
//! 3. 취약점 (패키지 식별자를 2의 결과로 해석)
//! 4. 일반 탐지 결과, 시크릿

mod container;
mod finding;
mod package;
mod secret;
mod vex;

use std::sync::{Arc, OnceLock};
use std::time::UNIX_EPOCH;

use metrics::counter;
use scanwire_core::metrics::{
    CODEC_DECODE_DEGRADED_TOTAL, CODEC_ENCODE_REJECTED_TOTAL, CODEC_PACKAGES_DECODED_TOTAL,
    CODEC_PACKAGES_ENCODED_TOTAL, LABEL_REASON, REASON_INVALID_DIGEST, REASON_MALFORMED_SECRET,
    REASON_UNRESOLVED_PACKAGE_ID,
};
use scanwire_core::model::{
    Digest, Inventory, Package, PluginStatus, ScanResult, ScanStatus,
};
use tracing::{debug, warn};

use crate::convert::{builtin_metadata_registry, builtin_secret_registry};
use crate::error::CodecError;
use crate::identity::{PackageIdMap, PackageIndex, link_layers, new_package_id};
use crate::registry::Registry;
use crate::tables::Tables;
use crate::wire::{self, Timestamp};

/// 스캔 결과 코덱
///
/// 생성 후에는 읽기 전용이므로 여러 스레드에서 공유할 수 있습니다.
pub struct InventoryCodec {
    metadata: Registry<wire::PackageMetadata>,
    secrets: Registry<wire::SecretKind>,
    tables: Tables,
}

impl InventoryCodec {
    /// 내장 메타데이터 형태와 자격 증명 종류를 모두 등록한 코덱을 생성합니다.
    pub fn new() -> Result<Self, CodecError> {
        Self::with_registries(builtin_metadata_registry()?, builtin_secret_registry()?)
    }

    /// 주어진 레지스트리로 코덱을 생성합니다.
    ///
    /// 내장 형태 외에 추가 형태를 등록한 레지스트리를 쓸 때 사용합니다.
    pub fn with_registries(
        metadata: Registry<wire::PackageMetadata>,
        secrets: Registry<wire::SecretKind>,
    ) -> Result<Self, CodecError> {
        let tables = Tables::new()?;
        debug!(
            metadata_shapes = metadata.len(),
            secret_kinds = secrets.len(),
            "inventory codec initialized"
        );
        Ok(Self {
            metadata,
            secrets,
            tables,
        })
    }

    /// 패키지 메타데이터 레지스트리
    pub fn metadata_registry(&self) -> &Registry<wire::PackageMetadata> {
        &self.metadata
    }

    /// 시크릿 자격 증명 레지스트리
    pub fn secret_registry(&self) -> &Registry<wire::SecretKind> {
        &self.secrets
    }

    /// enum 테이블
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    // ─── 스캔 결과 ─────────────────────────────────────────────────

    /// 스캔 결과 전체를 인코딩합니다.
    pub fn encode_scan_result(&self, result: &ScanResult) -> Result<wire::ScanResult, CodecError> {
        Ok(wire::ScanResult {
            version: result.version.clone(),
            start_time: Some(Timestamp::from(result.start_time)),
            end_time: Some(Timestamp::from(result.end_time)),
            status: Some(self.encode_status(&result.status)),
            plugin_status: result
                .plugin_status
                .iter()
                .map(|p| wire::PluginStatus {
                    name: p.name.clone(),
                    version: p.version,
                    status: Some(self.encode_status(&p.status)),
                })
                .collect(),
            inventory: Some(self.encode_inventory(&result.inventory)?),
        })
    }

    /// 스캔 결과 전체를 디코딩합니다.
    pub fn decode_scan_result(&self, wire: &wire::ScanResult) -> ScanResult {
        let time = |t: Option<Timestamp>| t.map_or(UNIX_EPOCH, |t| t.to_system_time());
        ScanResult {
            version: wire.version.clone(),
            start_time: time(wire.start_time),
            end_time: time(wire.end_time),
            status: self.decode_status(wire.status.as_ref()),
            plugin_status: wire
                .plugin_status
                .iter()
                .map(|p| PluginStatus {
                    name: p.name.clone(),
                    version: p.version,
                    status: self.decode_status(p.status.as_ref()),
                })
                .collect(),
            inventory: wire
                .inventory
                .as_ref()
                .map(|inv| self.decode_inventory(inv))
                .unwrap_or_default(),
        }
    }

    fn encode_status(&self, status: &ScanStatus) -> wire::ScanStatus {
        wire::ScanStatus {
            status: self.tables.scan_state.to_wire(status.state) as i32,
            failure_reason: status.failure_reason.clone(),
        }
    }

    fn decode_status(&self, status: Option<&wire::ScanStatus>) -> ScanStatus {
        status
            .map(|s| ScanStatus {
                state: self.tables.scan_state.to_domain(s.status()),
                failure_reason: s.failure_reason.clone(),
            })
            .unwrap_or_default()
    }

    // ─── 인벤토리 ──────────────────────────────────────────────────

    /// 인벤토리를 인코딩합니다.
    ///
    /// 패키지마다 새 식별자를 발급하고, 취약점은 같은 할당의 패키지 식별자로 연결합니다.
    pub fn encode_inventory(&self, inventory: &Inventory) -> Result<wire::Inventory, CodecError> {
        self.encode_inventory_inner(inventory).inspect_err(|err| {
            warn!(error = %err, "inventory encoding rejected");
            counter!(CODEC_ENCODE_REJECTED_TOTAL, LABEL_REASON => err.reason()).increment(1);
        })
    }

    fn encode_inventory_inner(&self, inventory: &Inventory) -> Result<wire::Inventory, CodecError> {
        let mut ids = PackageIdMap::with_capacity(inventory.packages.len());
        let mut packages = Vec::with_capacity(inventory.packages.len());
        for pkg in &inventory.packages {
            let id = new_package_id();
            packages.push(self.encode_package(pkg, id.clone())?);
            ids.insert(pkg, id);
        }

        let package_vulns = inventory
            .package_vulns
            .iter()
            .map(|vuln| self.encode_package_vuln(vuln, &ids))
            .collect::<Result<Vec<_>, _>>()?;
        let generic_findings = inventory
            .generic_findings
            .iter()
            .map(|finding| self.encode_generic_finding(finding))
            .collect::<Result<Vec<_>, _>>()?;
        let secrets = inventory
            .secrets
            .iter()
            .map(|secret| self.encode_secret(secret))
            .collect::<Result<Vec<_>, _>>()?;
        let container_image_metadata = inventory
            .container_image_metadata
            .iter()
            .enumerate()
            .map(|(position, container)| self.encode_container(position, container))
            .collect();

        counter!(CODEC_PACKAGES_ENCODED_TOTAL).increment(packages.len() as u64);
        debug!(
            packages = packages.len(),
            package_vulns = package_vulns.len(),
            generic_findings = generic_findings.len(),
            secrets = secrets.len(),
            "inventory encoded"
        );

        Ok(wire::Inventory {
            packages,
            package_vulns,
            generic_findings,
            secrets,
            container_image_metadata,
        })
    }

    /// 인벤토리를 디코딩합니다.
    ///
    /// 해석할 수 없는 취약점과 시크릿은 경고 후 버립니다.
    pub fn decode_inventory(&self, wire: &wire::Inventory) -> Inventory {
        let mut container_image_metadata: Vec<_> = wire
            .container_image_metadata
            .iter()
            .enumerate()
            .map(|(index, container)| self.decode_container(index, container))
            .collect();
        link_layers(&mut container_image_metadata);

        let packages: Vec<Arc<Package>> = wire
            .packages
            .iter()
            .map(|pkg| Arc::new(self.decode_package(pkg, &container_image_metadata)))
            .collect();
        let index = PackageIndex::build(
            wire.packages
                .iter()
                .map(|pkg| pkg.id.as_str())
                .zip(packages.iter()),
        );

        let package_vulns = wire
            .package_vulns
            .iter()
            .filter_map(|vuln| match self.decode_package_vuln(vuln, &index) {
                Ok(vuln) => Some(vuln),
                Err(err) => {
                    warn!(error = %err, "dropping vulnerability with unresolved package");
                    counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_UNRESOLVED_PACKAGE_ID)
                        .increment(1);
                    None
                }
            })
            .collect();
        let generic_findings = wire
            .generic_findings
            .iter()
            .map(|finding| self.decode_generic_finding(finding))
            .collect();
        let secrets = wire
            .secrets
            .iter()
            .filter_map(|secret| match self.decode_secret(secret) {
                Ok(secret) => Some(secret),
                Err(err) => {
                    warn!(error = %err, "dropping malformed secret");
                    counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_MALFORMED_SECRET)
                        .increment(1);
                    None
                }
            })
            .collect();

        counter!(CODEC_PACKAGES_DECODED_TOTAL).increment(packages.len() as u64);

        Inventory {
            packages,
            package_vulns,
            generic_findings,
            secrets,
            container_image_metadata,
        }
    }
}

/// 프로세스 전역 코덱을 반환합니다.
///
/// 처음 호출될 때 내장 형태를 모두 등록하여 한 번만 생성됩니다.
///
/// # Panics
///
/// 내장 레지스트리나 enum 테이블 구성이 잘못되어 있으면 패닉합니다.
/// 이는 빌드 결함이며 실행 중에 복구할 수 없습니다.
pub fn global() -> &'static InventoryCodec {
    static GLOBAL: OnceLock<InventoryCodec> = OnceLock::new();
    GLOBAL.get_or_init(|| match InventoryCodec::new() {
        Ok(codec) => codec,
        Err(err) => panic!("built-in inventory codec is misconfigured: {err}"),
    })
}

// ─── 다이제스트 ────────────────────────────────────────────────────

/// 와이어 다이제스트 문자열을 파싱합니다. 빈 값은 `None`, 잘못된 값은 경고 후 `None`.
fn parse_digest(field: &'static str, value: &str) -> Option<Digest> {
    if value.is_empty() {
        return None;
    }
    match Digest::parse(value) {
        Ok(digest) => Some(digest),
        Err(err) => {
            warn!(field, value, error = %err, "malformed digest, dropping");
            counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_INVALID_DIGEST)
                .increment(1);
            None
        }
    }
}

fn digest_to_wire(digest: Option<&Digest>) -> String {
    digest.map(|d| d.as_str().to_owned()).unwrap_or_default()
}
