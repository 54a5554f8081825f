//! 패키지 메시지와 VEX 신호

use super::metadata::*;
use crate::registry::WireVariant;

/// 패키지
///
/// `id`는 인코딩할 때마다 새로 발급되는 UUID이며,
/// [`super::PackageVuln::package_id`]가 이 값을 참조합니다.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Package {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub version: String,
    #[prost(message, optional, tag = "4")]
    pub source_code: Option<SourceCodeIdentifier>,
    #[prost(message, optional, tag = "5")]
    pub purl: Option<Purl>,
    #[prost(string, tag = "6")]
    pub ecosystem: String,
    #[prost(string, repeated, tag = "7")]
    pub locations: Vec<String>,
    #[prost(string, repeated, tag = "8")]
    pub plugins: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub licenses: Vec<String>,
    #[prost(enumeration = "PackageAnnotation", repeated, tag = "10")]
    pub annotations: Vec<i32>,
    #[prost(message, repeated, tag = "11")]
    pub exploitability_signals: Vec<PackageExploitabilitySignal>,
    #[prost(message, optional, tag = "12")]
    pub container_image_metadata_indexes: Option<ContainerImageMetadataIndexes>,
    #[prost(
        oneof = "PackageMetadata",
        tags = "20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47"
    )]
    pub metadata: Option<PackageMetadata>,
}

/// 패키지 메타데이터 (정확히 하나의 형태)
#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum PackageMetadata {
    #[prost(message, tag = "20")]
    DpkgMetadata(DpkgPackageMetadata),
    #[prost(message, tag = "21")]
    RpmMetadata(RpmPackageMetadata),
    #[prost(message, tag = "22")]
    ApkMetadata(ApkPackageMetadata),
    #[prost(message, tag = "23")]
    PacmanMetadata(PacmanPackageMetadata),
    #[prost(message, tag = "24")]
    PortageMetadata(PortagePackageMetadata),
    #[prost(message, tag = "25")]
    FlatpakMetadata(FlatpakPackageMetadata),
    #[prost(message, tag = "26")]
    SnapMetadata(SnapPackageMetadata),
    #[prost(message, tag = "27")]
    CosMetadata(CosPackageMetadata),
    #[prost(message, tag = "28")]
    NixMetadata(NixPackageMetadata),
    #[prost(message, tag = "29")]
    KernelModuleMetadata(KernelModuleMetadata),
    #[prost(message, tag = "30")]
    MacAppsMetadata(MacAppsMetadata),
    #[prost(message, tag = "31")]
    WindowsOsVersionMetadata(WindowsOsVersion),
    #[prost(message, tag = "32")]
    PythonMetadata(PythonPackageMetadata),
    #[prost(message, tag = "33")]
    PythonRequirementsMetadata(PythonRequirementsMetadata),
    #[prost(message, tag = "34")]
    PythonSetupMetadata(PythonSetupMetadata),
    #[prost(message, tag = "35")]
    JavascriptMetadata(JavascriptPackageJsonMetadata),
    #[prost(message, tag = "36")]
    JavaArchiveMetadata(JavaArchiveMetadata),
    #[prost(message, tag = "37")]
    JavaLockfileMetadata(JavaLockfileMetadata),
    #[prost(message, tag = "38")]
    DepsjsonMetadata(DepsJsonMetadata),
    #[prost(message, tag = "39")]
    OsvMetadata(OsvPackageMetadata),
    #[prost(message, tag = "40")]
    SpdxMetadata(SpdxPackageMetadata),
    #[prost(message, tag = "41")]
    CdxMetadata(CdxPackageMetadata),
    #[prost(message, tag = "42")]
    ContainerdContainerMetadata(ContainerdContainerMetadata),
    #[prost(message, tag = "43")]
    ContainerdRuntimeContainerMetadata(ContainerdRuntimeContainerMetadata),
    #[prost(message, tag = "44")]
    PodmanMetadata(PodmanMetadata),
    #[prost(message, tag = "45")]
    DockerContainersMetadata(DockerContainersMetadata),
    #[prost(message, tag = "46")]
    ChromeExtensionsMetadata(ChromeExtensionsMetadata),
    #[prost(message, tag = "47")]
    VscodeExtensionsMetadata(VscodeExtensionsMetadata),
}

impl WireVariant for PackageMetadata {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::DpkgMetadata(_) => "dpkg_metadata",
            Self::RpmMetadata(_) => "rpm_metadata",
            Self::ApkMetadata(_) => "apk_metadata",
            Self::PacmanMetadata(_) => "pacman_metadata",
            Self::PortageMetadata(_) => "portage_metadata",
            Self::FlatpakMetadata(_) => "flatpak_metadata",
            Self::SnapMetadata(_) => "snap_metadata",
            Self::CosMetadata(_) => "cos_metadata",
            Self::NixMetadata(_) => "nix_metadata",
            Self::KernelModuleMetadata(_) => "kernel_module_metadata",
            Self::MacAppsMetadata(_) => "mac_apps_metadata",
            Self::WindowsOsVersionMetadata(_) => "windows_os_version_metadata",
            Self::PythonMetadata(_) => "python_metadata",
            Self::PythonRequirementsMetadata(_) => "python_requirements_metadata",
            Self::PythonSetupMetadata(_) => "python_setup_metadata",
            Self::JavascriptMetadata(_) => "javascript_metadata",
            Self::JavaArchiveMetadata(_) => "java_archive_metadata",
            Self::JavaLockfileMetadata(_) => "java_lockfile_metadata",
            Self::DepsjsonMetadata(_) => "depsjson_metadata",
            Self::OsvMetadata(_) => "osv_metadata",
            Self::SpdxMetadata(_) => "spdx_metadata",
            Self::CdxMetadata(_) => "cdx_metadata",
            Self::ContainerdContainerMetadata(_) => "containerd_container_metadata",
            Self::ContainerdRuntimeContainerMetadata(_) => {
                "containerd_runtime_container_metadata"
            }
            Self::PodmanMetadata(_) => "podman_metadata",
            Self::DockerContainersMetadata(_) => "docker_containers_metadata",
            Self::ChromeExtensionsMetadata(_) => "chrome_extensions_metadata",
            Self::VscodeExtensionsMetadata(_) => "vscode_extensions_metadata",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceCodeIdentifier {
    #[prost(string, tag = "1")]
    pub repo: String,
    #[prost(string, tag = "2")]
    pub commit: String,
}

/// Package URL. `purl`은 나머지 필드로 만든 전체 문자열입니다.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Purl {
    #[prost(string, tag = "1")]
    pub purl: String,
    #[prost(string, tag = "2")]
    pub r#type: String,
    #[prost(string, tag = "3")]
    pub namespace: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub version: String,
    #[prost(message, repeated, tag = "6")]
    pub qualifiers: Vec<Qualifier>,
    #[prost(string, tag = "7")]
    pub subpath: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Qualifier {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// 패키지가 속한 레이어의 위치 (컨테이너 목록 인덱스, 레이어 목록 인덱스)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerImageMetadataIndexes {
    #[prost(int32, tag = "1")]
    pub container_image_index: i32,
    #[prost(int32, tag = "2")]
    pub layer_index: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PackageAnnotation {
    Unspecified = 0,
    Transitional = 1,
    InsideOsPackage = 2,
    InsideCacheDir = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VexJustification {
    Unspecified = 0,
    ComponentNotPresent = 1,
    VulnerableCodeNotPresent = 2,
    VulnerableCodeNotInExecutePath = 3,
    VulnerableCodeCannotBeControlledByAdversary = 4,
    InlineMitigationAlreadyExists = 5,
}

/// 패키지 단위 VEX 신호. `vuln_filter`는 두 모드 중 정확히 하나입니다.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageExploitabilitySignal {
    #[prost(string, tag = "1")]
    pub plugin: String,
    #[prost(enumeration = "VexJustification", tag = "2")]
    pub justification: i32,
    #[prost(oneof = "VulnFilter", tags = "3, 4")]
    pub vuln_filter: Option<VulnFilter>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum VulnFilter {
    #[prost(message, tag = "3")]
    VulnIdentifiers(VulnIdentifiers),
    #[prost(bool, tag = "4")]
    MatchesAllVulns(bool),
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VulnIdentifiers {
    #[prost(string, repeated, tag = "1")]
    pub identifiers: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindingExploitabilitySignal {
    #[prost(string, tag = "1")]
    pub plugin: String,
    #[prost(enumeration = "VexJustification", tag = "2")]
    pub justification: i32,
}
