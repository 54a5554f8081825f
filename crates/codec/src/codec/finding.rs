//! 일반 탐지 결과와 패키지 취약점 인코딩/디코딩

use scanwire_core::model::{
    Advisory, AdvisoryId, Cvss, GenericFinding, PackageVuln, Severity, TargetDetails,
    VulnSeverity, Vulnerability,
};

use super::InventoryCodec;
use crate::error::CodecError;
use crate::identity::{PackageIdMap, PackageIndex};
use crate::wire::{self, Timestamp};

impl InventoryCodec {
    // ─── 일반 탐지 결과 ────────────────────────────────────────────

    /// 일반 탐지 결과를 인코딩합니다. 권고와 권고 식별자는 필수입니다.
    pub fn encode_generic_finding(
        &self,
        finding: &GenericFinding,
    ) -> Result<wire::GenericFinding, CodecError> {
        let adv = finding.adv.as_ref().ok_or(CodecError::AdvisoryMissing)?;
        let id = adv.id.as_ref().ok_or(CodecError::AdvisoryIdMissing)?;

        Ok(wire::GenericFinding {
            adv: Some(wire::Advisory {
                id: Some(wire::AdvisoryId {
                    publisher: id.publisher.clone(),
                    reference: id.reference.clone(),
                }),
                r#type: self.tables.advisory_type.to_wire(adv.advisory_type) as i32,
                title: adv.title.clone(),
                description: adv.description.clone(),
                recommendation: adv.recommendation.clone(),
                sev: Some(self.encode_severity(&adv.severity)),
            }),
            target: finding.target.as_ref().map(|t| wire::TargetDetails {
                extra: t.extra.clone(),
            }),
            plugins: finding.plugins.clone(),
            exploitability_signals: finding
                .exploitability_signals
                .iter()
                .map(|signal| self.encode_finding_signal(signal))
                .collect(),
        })
    }

    /// 일반 탐지 결과를 디코딩합니다.
    pub fn decode_generic_finding(&self, wire: &wire::GenericFinding) -> GenericFinding {
        GenericFinding {
            adv: wire.adv.as_ref().map(|adv| Advisory {
                id: adv.id.as_ref().map(|id| AdvisoryId {
                    publisher: id.publisher.clone(),
                    reference: id.reference.clone(),
                }),
                advisory_type: self.tables.advisory_type.to_domain(adv.r#type()),
                title: adv.title.clone(),
                description: adv.description.clone(),
                recommendation: adv.recommendation.clone(),
                severity: adv
                    .sev
                    .as_ref()
                    .map(|sev| self.decode_severity(sev))
                    .unwrap_or_default(),
            }),
            target: wire.target.as_ref().map(|t| TargetDetails {
                extra: t.extra.clone(),
            }),
            plugins: wire.plugins.clone(),
            exploitability_signals: wire
                .exploitability_signals
                .iter()
                .map(|signal| self.decode_finding_signal(signal))
                .collect(),
        }
    }

    fn encode_severity(&self, severity: &Severity) -> wire::Severity {
        let cvss = |c: &Cvss| wire::CvssScore {
            base_score: c.base_score,
            temporal_score: c.temporal_score,
            environmental_score: c.environmental_score,
        };
        wire::Severity {
            severity: self.tables.severity.to_wire(severity.level) as i32,
            cvss_v2: severity.cvss_v2.as_ref().map(cvss),
            cvss_v3: severity.cvss_v3.as_ref().map(cvss),
        }
    }

    fn decode_severity(&self, severity: &wire::Severity) -> Severity {
        let cvss = |c: &wire::CvssScore| Cvss {
            base_score: c.base_score,
            temporal_score: c.temporal_score,
            environmental_score: c.environmental_score,
        };
        Severity {
            level: self.tables.severity.to_domain(severity.severity()),
            cvss_v2: severity.cvss_v2.as_ref().map(cvss),
            cvss_v3: severity.cvss_v3.as_ref().map(cvss),
        }
    }

    // ─── 패키지 취약점 ─────────────────────────────────────────────

    /// 패키지 취약점을 인코딩합니다. 가리키는 패키지의 식별자를 `ids`에서 찾습니다.
    pub(crate) fn encode_package_vuln(
        &self,
        vuln: &PackageVuln,
        ids: &PackageIdMap,
    ) -> Result<wire::PackageVuln, CodecError> {
        let package_id = ids.resolve(&vuln.package)?;
        Ok(wire::PackageVuln {
            vuln: Some(vulnerability_to_wire(&vuln.vulnerability)),
            package_id: package_id.to_owned(),
            plugins: vuln.plugins.clone(),
            exploitability_signals: vuln
                .exploitability_signals
                .iter()
                .map(|signal| self.encode_finding_signal(signal))
                .collect(),
        })
    }

    /// 패키지 취약점을 디코딩합니다. 패키지 식별자를 해석할 수 없으면 에러입니다.
    pub(crate) fn decode_package_vuln(
        &self,
        wire: &wire::PackageVuln,
        index: &PackageIndex,
    ) -> Result<PackageVuln, CodecError> {
        let package = index
            .resolve(&wire.package_id)
            .ok_or_else(|| CodecError::PackageIdUnresolved {
                id: wire.package_id.clone(),
            })?;
        Ok(PackageVuln {
            vulnerability: wire
                .vuln
                .as_ref()
                .map(vulnerability_to_domain)
                .unwrap_or_default(),
            package,
            plugins: wire.plugins.clone(),
            exploitability_signals: wire
                .exploitability_signals
                .iter()
                .map(|signal| self.decode_finding_signal(signal))
                .collect(),
        })
    }
}

fn vulnerability_to_wire(vuln: &Vulnerability) -> wire::Vulnerability {
    wire::Vulnerability {
        id: vuln.id.clone(),
        aliases: vuln.aliases.clone(),
        summary: vuln.summary.clone(),
        details: vuln.details.clone(),
        published: vuln.published.map(Timestamp::from),
        modified: vuln.modified.map(Timestamp::from),
        severity: vuln
            .severity
            .iter()
            .map(|s| wire::VulnSeverity {
                r#type: s.kind.clone(),
                score: s.score.clone(),
            })
            .collect(),
    }
}

fn vulnerability_to_domain(vuln: &wire::Vulnerability) -> Vulnerability {
    Vulnerability {
        id: vuln.id.clone(),
        aliases: vuln.aliases.clone(),
        summary: vuln.summary.clone(),
        details: vuln.details.clone(),
        published: vuln.published.map(|t| t.to_system_time()),
        modified: vuln.modified.map(|t| t.to_system_time()),
        severity: vuln
            .severity
            .iter()
            .map(|s| VulnSeverity {
                kind: s.r#type.clone(),
                score: s.score.clone(),
            })
            .collect(),
    }
}
