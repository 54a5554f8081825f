//! 에코시스템별 패키지 메타데이터 메시지

use std::collections::BTreeMap;

use super::Timestamp;
use super::package::Purl;

// ─── OS ─────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DpkgPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub source_name: String,
    #[prost(string, tag = "3")]
    pub source_version: String,
    #[prost(string, tag = "4")]
    pub package_version: String,
    #[prost(string, tag = "5")]
    pub os_id: String,
    #[prost(string, tag = "6")]
    pub os_version_codename: String,
    #[prost(string, tag = "7")]
    pub os_version_id: String,
    #[prost(string, tag = "8")]
    pub maintainer: String,
    #[prost(string, tag = "9")]
    pub architecture: String,
    #[prost(string, tag = "10")]
    pub status: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RpmPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub source_rpm: String,
    #[prost(int32, tag = "3")]
    pub epoch: i32,
    #[prost(string, tag = "4")]
    pub os_name: String,
    #[prost(string, tag = "5")]
    pub os_id: String,
    #[prost(string, tag = "6")]
    pub os_version_id: String,
    #[prost(string, tag = "7")]
    pub os_build_id: String,
    #[prost(string, tag = "8")]
    pub vendor: String,
    #[prost(string, tag = "9")]
    pub architecture: String,
    #[prost(string, tag = "10")]
    pub license: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApkPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub origin_name: String,
    #[prost(string, tag = "3")]
    pub os_id: String,
    #[prost(string, tag = "4")]
    pub os_version_id: String,
    #[prost(string, tag = "5")]
    pub maintainer: String,
    #[prost(string, tag = "6")]
    pub architecture: String,
    #[prost(string, tag = "7")]
    pub license: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacmanPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_version: String,
    #[prost(string, tag = "3")]
    pub os_id: String,
    #[prost(string, tag = "4")]
    pub os_version_id: String,
    #[prost(string, tag = "5")]
    pub package_dependencies: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortagePackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_version: String,
    #[prost(string, tag = "3")]
    pub os_id: String,
    #[prost(string, tag = "4")]
    pub os_version_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlatpakPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_id: String,
    #[prost(string, tag = "3")]
    pub package_version: String,
    #[prost(string, tag = "4")]
    pub release_date: String,
    #[prost(string, tag = "5")]
    pub os_name: String,
    #[prost(string, tag = "6")]
    pub os_id: String,
    #[prost(string, tag = "7")]
    pub os_version_id: String,
    #[prost(string, tag = "8")]
    pub os_build_id: String,
    #[prost(string, tag = "9")]
    pub developer: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnapPackageMetadata {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, tag = "3")]
    pub grade: String,
    #[prost(string, tag = "4")]
    pub r#type: String,
    #[prost(string, repeated, tag = "5")]
    pub architectures: Vec<String>,
    #[prost(string, tag = "6")]
    pub os_id: String,
    #[prost(string, tag = "7")]
    pub os_version_codename: String,
    #[prost(string, tag = "8")]
    pub os_version_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CosPackageMetadata {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, tag = "3")]
    pub category: String,
    #[prost(string, tag = "4")]
    pub os_version: String,
    #[prost(string, tag = "5")]
    pub os_version_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NixPackageMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_version: String,
    #[prost(string, tag = "3")]
    pub package_hash: String,
    #[prost(string, tag = "4")]
    pub package_output: String,
    #[prost(string, tag = "5")]
    pub os_id: String,
    #[prost(string, tag = "6")]
    pub os_version_codename: String,
    #[prost(string, tag = "7")]
    pub os_version_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KernelModuleMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_version: String,
    #[prost(string, tag = "3")]
    pub package_vermagic: String,
    #[prost(string, tag = "4")]
    pub package_source_version_identifier: String,
    #[prost(string, tag = "5")]
    pub os_id: String,
    #[prost(string, tag = "6")]
    pub os_version_codename: String,
    #[prost(string, tag = "7")]
    pub os_version_id: String,
    #[prost(string, tag = "8")]
    pub package_author: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MacAppsMetadata {
    #[prost(string, tag = "1")]
    pub bundle_display_name: String,
    #[prost(string, tag = "2")]
    pub bundle_identifier: String,
    #[prost(string, tag = "3")]
    pub bundle_short_version_string: String,
    #[prost(string, tag = "4")]
    pub bundle_executable: String,
    #[prost(string, tag = "5")]
    pub bundle_name: String,
    #[prost(string, tag = "6")]
    pub bundle_package_type: String,
    #[prost(string, tag = "7")]
    pub bundle_signature: String,
    #[prost(string, tag = "8")]
    pub bundle_version: String,
    #[prost(string, tag = "9")]
    pub product_id: String,
    #[prost(string, tag = "10")]
    pub update_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowsOsVersion {
    #[prost(string, tag = "1")]
    pub product: String,
    #[prost(string, tag = "2")]
    pub full_version: String,
}

// ─── 언어 / SBOM ────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PythonPackageMetadata {
    #[prost(string, tag = "1")]
    pub author: String,
    #[prost(string, tag = "2")]
    pub author_email: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PythonRequirementsMetadata {
    #[prost(string, repeated, tag = "1")]
    pub hash_checking_mode_values: Vec<String>,
    #[prost(string, tag = "2")]
    pub version_comparator: String,
    #[prost(string, tag = "3")]
    pub requirement: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PythonSetupMetadata {
    #[prost(string, tag = "1")]
    pub version_comparator: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JavascriptPackageJsonMetadata {
    #[prost(string, tag = "1")]
    pub author: String,
    #[prost(string, repeated, tag = "2")]
    pub contributors: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub maintainers: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JavaArchiveMetadata {
    #[prost(string, tag = "1")]
    pub artifact_id: String,
    #[prost(string, tag = "2")]
    pub group_id: String,
    #[prost(string, tag = "3")]
    pub sha1: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JavaLockfileMetadata {
    #[prost(string, tag = "1")]
    pub artifact_id: String,
    #[prost(string, tag = "2")]
    pub group_id: String,
    #[prost(bool, tag = "3")]
    pub is_transitive: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DepsJsonMetadata {
    #[prost(string, tag = "1")]
    pub package_name: String,
    #[prost(string, tag = "2")]
    pub package_version: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OsvPackageMetadata {
    #[prost(string, tag = "1")]
    pub purl_type: String,
    #[prost(string, tag = "2")]
    pub commit: String,
    #[prost(string, tag = "3")]
    pub ecosystem: String,
    #[prost(string, tag = "4")]
    pub compare_as: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpdxPackageMetadata {
    #[prost(message, optional, tag = "1")]
    pub purl: Option<Purl>,
    #[prost(string, repeated, tag = "2")]
    pub cpes: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CdxPackageMetadata {
    #[prost(message, optional, tag = "1")]
    pub purl: Option<Purl>,
    #[prost(string, repeated, tag = "2")]
    pub cpes: Vec<String>,
}

// ─── 컨테이너 ───────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerdContainerMetadata {
    #[prost(string, tag = "1")]
    pub namespace_name: String,
    #[prost(string, tag = "2")]
    pub image_name: String,
    #[prost(string, tag = "3")]
    pub image_digest: String,
    #[prost(string, tag = "4")]
    pub runtime: String,
    #[prost(string, tag = "5")]
    pub id: String,
    #[prost(int32, tag = "6")]
    pub pid: i32,
    #[prost(string, tag = "7")]
    pub snapshotter: String,
    #[prost(string, tag = "8")]
    pub snapshot_key: String,
    #[prost(string, tag = "9")]
    pub lower_dir: String,
    #[prost(string, tag = "10")]
    pub upper_dir: String,
    #[prost(string, tag = "11")]
    pub work_dir: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerdRuntimeContainerMetadata {
    #[prost(string, tag = "1")]
    pub namespace_name: String,
    #[prost(string, tag = "2")]
    pub image_name: String,
    #[prost(string, tag = "3")]
    pub image_digest: String,
    #[prost(string, tag = "4")]
    pub runtime: String,
    #[prost(string, tag = "5")]
    pub id: String,
    #[prost(int32, tag = "6")]
    pub pid: i32,
    #[prost(string, tag = "7")]
    pub rootfs_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PodmanMetadata {
    #[prost(btree_map = "uint32, message", tag = "1")]
    pub exposed_ports: BTreeMap<u32, Protocol>,
    #[prost(int32, tag = "2")]
    pub pid: i32,
    #[prost(string, tag = "3")]
    pub namespace_name: String,
    #[prost(message, optional, tag = "4")]
    pub started_time: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub finished_time: Option<Timestamp>,
    #[prost(string, tag = "6")]
    pub status: String,
    #[prost(int32, tag = "7")]
    pub exit_code: i32,
    #[prost(bool, tag = "8")]
    pub exited: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Protocol {
    #[prost(string, repeated, tag = "1")]
    pub names: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DockerContainersMetadata {
    #[prost(string, tag = "1")]
    pub image_name: String,
    #[prost(string, tag = "2")]
    pub image_digest: String,
    #[prost(string, tag = "3")]
    pub id: String,
    #[prost(message, repeated, tag = "4")]
    pub ports: Vec<DockerPort>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DockerPort {
    #[prost(string, tag = "1")]
    pub ip: String,
    #[prost(uint32, tag = "2")]
    pub private_port: u32,
    #[prost(uint32, tag = "3")]
    pub public_port: u32,
    #[prost(string, tag = "4")]
    pub r#type: String,
}

// ─── 기타 ───────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChromeExtensionsMetadata {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub author_email: String,
    #[prost(string, repeated, tag = "4")]
    pub host_permissions: Vec<String>,
    #[prost(int32, tag = "5")]
    pub manifest_version: i32,
    #[prost(string, tag = "6")]
    pub minimum_chrome_version: String,
    #[prost(string, repeated, tag = "7")]
    pub permissions: Vec<String>,
    #[prost(string, tag = "8")]
    pub update_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VscodeExtensionsMetadata {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub publisher_name: String,
    #[prost(string, tag = "3")]
    pub publisher_display_name: String,
    #[prost(string, tag = "4")]
    pub target_platform: String,
    #[prost(bool, tag = "5")]
    pub updated: bool,
    #[prost(bool, tag = "6")]
    pub is_pre_release_version: bool,
    #[prost(int64, tag = "7")]
    pub installed_timestamp: i64,
}
