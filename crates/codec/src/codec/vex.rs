//! VEX 악용 가능성 신호 인코딩/디코딩

use scanwire_core::model::{FindingExploitabilitySignal, PackageExploitabilitySignal};

use super::InventoryCodec;
use crate::error::CodecError;
use crate::wire::{self, VulnFilter};

impl InventoryCodec {
    /// 패키지 신호를 인코딩합니다.
    ///
    /// 취약점 식별자 목록과 전체 일치는 와이어에서 oneof이므로 동시에 설정할 수 없습니다.
    pub(crate) fn encode_package_signal(
        &self,
        signal: &PackageExploitabilitySignal,
    ) -> Result<wire::PackageExploitabilitySignal, CodecError> {
        let vuln_filter = match (signal.vuln_identifiers.is_empty(), signal.matches_all_vulns) {
            (false, true) => {
                return Err(CodecError::VulnIdentifiersAndMatchesAllSet {
                    plugin: signal.plugin.clone(),
                });
            }
            (false, false) => Some(VulnFilter::VulnIdentifiers(wire::VulnIdentifiers {
                identifiers: signal.vuln_identifiers.clone(),
            })),
            (true, true) => Some(VulnFilter::MatchesAllVulns(true)),
            (true, false) => None,
        };

        Ok(wire::PackageExploitabilitySignal {
            plugin: signal.plugin.clone(),
            justification: self.tables.justification.to_wire(signal.justification) as i32,
            vuln_filter,
        })
    }

    pub(crate) fn decode_package_signal(
        &self,
        wire: &wire::PackageExploitabilitySignal,
    ) -> PackageExploitabilitySignal {
        let (vuln_identifiers, matches_all_vulns) = match &wire.vuln_filter {
            Some(VulnFilter::VulnIdentifiers(ids)) => (ids.identifiers.clone(), false),
            Some(VulnFilter::MatchesAllVulns(all)) => (Vec::new(), *all),
            None => (Vec::new(), false),
        };
        PackageExploitabilitySignal {
            plugin: wire.plugin.clone(),
            justification: self.tables.justification.to_domain(wire.justification()),
            vuln_identifiers,
            matches_all_vulns,
        }
    }

    pub(crate) fn encode_finding_signal(
        &self,
        signal: &FindingExploitabilitySignal,
    ) -> wire::FindingExploitabilitySignal {
        wire::FindingExploitabilitySignal {
            plugin: signal.plugin.clone(),
            justification: self.tables.justification.to_wire(signal.justification) as i32,
        }
    }

    pub(crate) fn decode_finding_signal(
        &self,
        wire: &wire::FindingExploitabilitySignal,
    ) -> FindingExploitabilitySignal {
        FindingExploitabilitySignal {
            plugin: wire.plugin.clone(),
            justification: self.tables.justification.to_domain(wire.justification()),
        }
    }
}
