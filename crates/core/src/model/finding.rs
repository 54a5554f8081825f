//! 보안 탐지 결과: 일반 탐지 결과(권고)와 패키지 취약점

use std::sync::Arc;
use std::time::SystemTime;

use crate::model::package::Package;
use crate::model::vex::FindingExploitabilitySignal;

/// 심각도 수준
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityLevel {
    /// 지정되지 않음
    #[default]
    Unspecified,
    /// 최소
    Minimal,
    /// 낮음
    Low,
    /// 중간
    Medium,
    /// 높음
    High,
    /// 치명적
    Critical,
}

/// CVSS 점수 묶음
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cvss {
    pub base_score: f32,
    pub temporal_score: f32,
    pub environmental_score: f32,
}

/// 권고 심각도
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Severity {
    /// 수준
    pub level: SeverityLevel,
    /// CVSS v2 점수
    pub cvss_v2: Option<Cvss>,
    /// CVSS v3 점수
    pub cvss_v3: Option<Cvss>,
}

/// 권고 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdvisoryType {
    #[default]
    Unknown,
    Vulnerability,
    CisFinding,
}

/// 권고 식별자 (발행자 + 참조)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryId {
    /// 발행자 (예: `CVE`, `CIS`)
    pub publisher: String,
    /// 발행자 내 참조 (예: `CVE-2024-1234`)
    pub reference: String,
}

/// 보안 권고
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advisory {
    /// 식별자 (인코딩 시 필수)
    pub id: Option<AdvisoryId>,
    pub advisory_type: AdvisoryType,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub severity: Severity,
}

/// 탐지 대상 상세 (자유 형식)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDetails {
    pub extra: String,
}

/// 패키지에 묶이지 않는 일반 탐지 결과
///
/// 다른 컬렉션을 참조하지 않는 자족적인 값입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericFinding {
    /// 권고 (인코딩 시 필수)
    pub adv: Option<Advisory>,
    /// 탐지 대상
    pub target: Option<TargetDetails>,
    /// 결과를 생성한 플러그인
    pub plugins: Vec<String>,
    /// VEX 신호
    pub exploitability_signals: Vec<FindingExploitabilitySignal>,
}

/// OSV 형식 심각도 항목 (예: `CVSS_V3` + 벡터 문자열)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnSeverity {
    pub kind: String,
    pub score: String,
}

/// OSV 형식 취약점 레코드
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vulnerability {
    pub id: String,
    pub aliases: Vec<String>,
    pub summary: String,
    pub details: String,
    pub published: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub severity: Vec<VulnSeverity>,
}

/// 특정 패키지에 대한 취약점
///
/// `package`는 인벤토리의 패키지 목록과 같은 `Arc`를 가리켜야 합니다.
/// 인코딩 시 포인터 동일성으로 패키지 식별자를 찾습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageVuln {
    /// 취약점 레코드
    pub vulnerability: Vulnerability,
    /// 영향을 받는 패키지
    pub package: Arc<Package>,
    /// 결과를 생성한 플러그인
    pub plugins: Vec<String>,
    /// VEX 신호
    pub exploitability_signals: Vec<FindingExploitabilitySignal>,
}

impl PackageVuln {
    /// 취약점 레코드와 패키지로 새 항목을 만듭니다.
    pub fn new(vulnerability: Vulnerability, package: Arc<Package>) -> Self {
        Self {
            vulnerability,
            package,
            plugins: Vec::new(),
            exploitability_signals: Vec::new(),
        }
    }
}
