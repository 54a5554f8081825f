//! VEX (Vulnerability Exploitability eXchange) 신호

/// 취약점이 악용 불가능한 이유
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    /// 지정되지 않음
    #[default]
    Unspecified,
    /// 컴포넌트가 존재하지 않음
    ComponentNotPresent,
    /// 취약한 코드가 존재하지 않음
    VulnerableCodeNotPresent,
    /// 취약한 코드가 실행 경로에 없음
    VulnerableCodeNotInExecutePath,
    /// 공격자가 취약한 코드를 제어할 수 없음
    VulnerableCodeCannotBeControlledByAdversary,
    /// 인라인 완화 조치가 이미 존재함
    InlineMitigationAlreadyExists,
}

/// 패키지 단위 VEX 신호
///
/// `vuln_identifiers`와 `matches_all_vulns`는 상호 배타적입니다.
/// 둘 다 설정된 신호는 인코딩 시 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageExploitabilitySignal {
    /// 신호를 생성한 플러그인
    pub plugin: String,
    /// 악용 불가 사유
    pub justification: Justification,
    /// 신호가 적용되는 취약점 식별자
    pub vuln_identifiers: Vec<String>,
    /// 패키지의 모든 취약점에 적용되는지 여부
    pub matches_all_vulns: bool,
}

/// 개별 탐지 결과 단위 VEX 신호
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingExploitabilitySignal {
    /// 신호를 생성한 플러그인
    pub plugin: String,
    /// 악용 불가 사유
    pub justification: Justification,
}
