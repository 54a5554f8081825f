//! 최상위 스캔 결과와 인벤토리 메시지

use super::Timestamp;
use super::container::ContainerImageMetadata;
use super::finding::{GenericFinding, PackageVuln};
use super::package::Package;
use super::secret::Secret;

/// 스캔 결과
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanResult {
    #[prost(string, tag = "1")]
    pub version: String,
    #[prost(message, optional, tag = "2")]
    pub start_time: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub end_time: Option<Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub status: Option<ScanStatus>,
    #[prost(message, repeated, tag = "5")]
    pub plugin_status: Vec<PluginStatus>,
    #[prost(message, optional, tag = "6")]
    pub inventory: Option<Inventory>,
}

/// 스캔/플러그인 상태
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanStatus {
    #[prost(enumeration = "ScanStatusEnum", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub failure_reason: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ScanStatusEnum {
    Unspecified = 0,
    Succeeded = 1,
    PartiallySucceeded = 2,
    Failed = 3,
}

/// 플러그인별 상태
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginStatus {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub version: u32,
    #[prost(message, optional, tag = "3")]
    pub status: Option<ScanStatus>,
}

/// 인벤토리
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Inventory {
    #[prost(message, repeated, tag = "1")]
    pub packages: Vec<Package>,
    #[prost(message, repeated, tag = "2")]
    pub package_vulns: Vec<PackageVuln>,
    #[prost(message, repeated, tag = "3")]
    pub generic_findings: Vec<GenericFinding>,
    #[prost(message, repeated, tag = "4")]
    pub secrets: Vec<Secret>,
    #[prost(message, repeated, tag = "5")]
    pub container_image_metadata: Vec<ContainerImageMetadata>,
}
