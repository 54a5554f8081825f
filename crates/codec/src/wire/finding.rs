//! 일반 탐지 결과와 패키지 취약점 메시지

use super::Timestamp;
use super::package::FindingExploitabilitySignal;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenericFinding {
    #[prost(message, optional, tag = "1")]
    pub adv: Option<Advisory>,
    #[prost(message, optional, tag = "2")]
    pub target: Option<TargetDetails>,
    #[prost(string, repeated, tag = "3")]
    pub plugins: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub exploitability_signals: Vec<FindingExploitabilitySignal>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Advisory {
    #[prost(message, optional, tag = "1")]
    pub id: Option<AdvisoryId>,
    #[prost(enumeration = "AdvisoryTypeEnum", tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub recommendation: String,
    #[prost(message, optional, tag = "6")]
    pub sev: Option<Severity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AdvisoryTypeEnum {
    Unknown = 0,
    Vulnerability = 1,
    CisFinding = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdvisoryId {
    #[prost(string, tag = "1")]
    pub publisher: String,
    #[prost(string, tag = "2")]
    pub reference: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Severity {
    #[prost(enumeration = "SeverityEnum", tag = "1")]
    pub severity: i32,
    #[prost(message, optional, tag = "2")]
    pub cvss_v2: Option<CvssScore>,
    #[prost(message, optional, tag = "3")]
    pub cvss_v3: Option<CvssScore>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SeverityEnum {
    Unspecified = 0,
    Minimal = 1,
    Low = 2,
    Medium = 3,
    High = 4,
    Critical = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CvssScore {
    #[prost(float, tag = "1")]
    pub base_score: f32,
    #[prost(float, tag = "2")]
    pub temporal_score: f32,
    #[prost(float, tag = "3")]
    pub environmental_score: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TargetDetails {
    #[prost(string, tag = "1")]
    pub extra: String,
}

/// 패키지 취약점. 패키지는 `package_id`로 참조합니다.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageVuln {
    #[prost(message, optional, tag = "1")]
    pub vuln: Option<Vulnerability>,
    #[prost(string, tag = "2")]
    pub package_id: String,
    #[prost(string, repeated, tag = "3")]
    pub plugins: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub exploitability_signals: Vec<FindingExploitabilitySignal>,
}

/// OSV 형식 취약점 레코드
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vulnerability {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, repeated, tag = "2")]
    pub aliases: Vec<String>,
    #[prost(string, tag = "3")]
    pub summary: String,
    #[prost(string, tag = "4")]
    pub details: String,
    #[prost(message, optional, tag = "5")]
    pub published: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub modified: Option<Timestamp>,
    #[prost(message, repeated, tag = "7")]
    pub severity: Vec<VulnSeverity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VulnSeverity {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, tag = "2")]
    pub score: String,
}
