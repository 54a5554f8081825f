//! enum 양방향 테이블
//!
//! 닫힌 도메인 enum과 와이어 enum 사이의 유한 전단사 매핑입니다.
//! 테이블은 코덱 초기화 시 한 번 만들어지며, 역방향 테이블의 항목 수가
//! 정방향과 다르면 (두 도메인 값이 같은 와이어 값을 공유하면) 구성이 실패합니다.
//!
//! 매핑되지 않은 값은 양방향 모두 "unspecified" 값으로 변환됩니다.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use scanwire_core::model::{
    AdvisoryType, Annotation, Justification, ScanState, SeverityLevel, ValidationStatus,
};

use crate::error::TableError;
use crate::wire;

/// 도메인 enum ↔ 와이어 enum 전단사 테이블
#[derive(Debug, Clone)]
pub struct EnumTable<D, W> {
    name: &'static str,
    forward: HashMap<D, W>,
    reverse: HashMap<W, D>,
    domain_unspecified: D,
    wire_unspecified: W,
}

impl<D, W> EnumTable<D, W>
where
    D: Copy + Eq + Hash + Debug,
    W: Copy + Eq + Hash + Debug,
{
    /// 매핑 쌍으로 테이블을 구성하고 전단사 여부를 검증합니다.
    pub fn new(
        name: &'static str,
        pairs: &[(D, W)],
        domain_unspecified: D,
        wire_unspecified: W,
    ) -> Result<Self, TableError> {
        let mut forward = HashMap::with_capacity(pairs.len());
        for (domain, wire) in pairs {
            if forward.insert(*domain, *wire).is_some() {
                return Err(TableError::DuplicateDomainValue {
                    table: name,
                    value: format!("{domain:?}"),
                });
            }
        }

        let reverse: HashMap<W, D> = forward.iter().map(|(d, w)| (*w, *d)).collect();
        if reverse.len() != forward.len() {
            return Err(TableError::CollapsedEntries {
                table: name,
                forward: forward.len(),
                reverse: reverse.len(),
            });
        }

        Ok(Self {
            name,
            forward,
            reverse,
            domain_unspecified,
            wire_unspecified,
        })
    }

    /// 도메인 값 -> 와이어 값 (매핑 없으면 unspecified)
    pub fn to_wire(&self, value: D) -> W {
        self.forward
            .get(&value)
            .copied()
            .unwrap_or(self.wire_unspecified)
    }

    /// 와이어 값 -> 도메인 값 (매핑 없으면 unspecified)
    pub fn to_domain(&self, value: W) -> D {
        self.reverse
            .get(&value)
            .copied()
            .unwrap_or(self.domain_unspecified)
    }

    /// 테이블 이름
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 매핑 항목 수
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// 매핑이 없으면 `true`
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// 모든 매핑 쌍을 순회합니다 (순서 없음).
    pub fn pairs(&self) -> impl Iterator<Item = (D, W)> + '_ {
        self.forward.iter().map(|(d, w)| (*d, *w))
    }
}

/// 코덱이 사용하는 모든 enum 테이블
#[derive(Debug, Clone)]
pub struct Tables {
    pub scan_state: EnumTable<ScanState, wire::ScanStatusEnum>,
    pub severity: EnumTable<SeverityLevel, wire::SeverityEnum>,
    pub advisory_type: EnumTable<AdvisoryType, wire::AdvisoryTypeEnum>,
    pub justification: EnumTable<Justification, wire::VexJustification>,
    pub annotation: EnumTable<Annotation, wire::PackageAnnotation>,
    pub validation: EnumTable<ValidationStatus, wire::SecretStatusEnum>,
}

impl Tables {
    /// 내장 테이블을 모두 구성합니다.
    pub fn new() -> Result<Self, TableError> {
        use wire::{
            AdvisoryTypeEnum as WA, PackageAnnotation as WN, ScanStatusEnum as WS,
            SecretStatusEnum as WV, SeverityEnum as WSev, VexJustification as WJ,
        };

        Ok(Self {
            scan_state: EnumTable::new(
                "scan status",
                &[
                    (ScanState::Unspecified, WS::Unspecified),
                    (ScanState::Succeeded, WS::Succeeded),
                    (ScanState::PartiallySucceeded, WS::PartiallySucceeded),
                    (ScanState::Failed, WS::Failed),
                ],
                ScanState::Unspecified,
                WS::Unspecified,
            )?,
            severity: EnumTable::new(
                "severity",
                &[
                    (SeverityLevel::Unspecified, WSev::Unspecified),
                    (SeverityLevel::Minimal, WSev::Minimal),
                    (SeverityLevel::Low, WSev::Low),
                    (SeverityLevel::Medium, WSev::Medium),
                    (SeverityLevel::High, WSev::High),
                    (SeverityLevel::Critical, WSev::Critical),
                ],
                SeverityLevel::Unspecified,
                WSev::Unspecified,
            )?,
            advisory_type: EnumTable::new(
                "advisory type",
                &[
                    (AdvisoryType::Unknown, WA::Unknown),
                    (AdvisoryType::Vulnerability, WA::Vulnerability),
                    (AdvisoryType::CisFinding, WA::CisFinding),
                ],
                AdvisoryType::Unknown,
                WA::Unknown,
            )?,
            justification: EnumTable::new(
                "vex justification",
                &[
                    (Justification::Unspecified, WJ::Unspecified),
                    (Justification::ComponentNotPresent, WJ::ComponentNotPresent),
                    (
                        Justification::VulnerableCodeNotPresent,
                        WJ::VulnerableCodeNotPresent,
                    ),
                    (
                        Justification::VulnerableCodeNotInExecutePath,
                        WJ::VulnerableCodeNotInExecutePath,
                    ),
                    (
                        Justification::VulnerableCodeCannotBeControlledByAdversary,
                        WJ::VulnerableCodeCannotBeControlledByAdversary,
                    ),
                    (
                        Justification::InlineMitigationAlreadyExists,
                        WJ::InlineMitigationAlreadyExists,
                    ),
                ],
                Justification::Unspecified,
                WJ::Unspecified,
            )?,
            annotation: EnumTable::new(
                "annotation",
                &[
                    (Annotation::Unknown, WN::Unspecified),
                    (Annotation::Transitional, WN::Transitional),
                    (Annotation::InsideOsPackage, WN::InsideOsPackage),
                    (Annotation::InsideCacheDir, WN::InsideCacheDir),
                ],
                Annotation::Unknown,
                WN::Unspecified,
            )?,
            validation: EnumTable::new(
                "validation status",
                &[
                    (ValidationStatus::Unspecified, WV::Unspecified),
                    (ValidationStatus::Unsupported, WV::Unsupported),
                    (ValidationStatus::Failed, WV::Failed),
                    (ValidationStatus::Invalid, WV::Invalid),
                    (ValidationStatus::Valid, WV::Valid),
                ],
                ValidationStatus::Unspecified,
                WV::Unspecified,
            )?,
        })
    }
}
