//! OS 패키지 관리자 메타데이터

/// Debian/Ubuntu dpkg 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DpkgMetadata {
    pub package_name: String,
    pub source_name: String,
    /// dpkg status 필드 (예: `install ok installed`)
    pub status: String,
    pub source_version: String,
    pub package_version: String,
    pub os_id: String,
    pub os_version_codename: String,
    pub os_version_id: String,
    pub maintainer: String,
    pub architecture: String,
}

/// RPM 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpmMetadata {
    pub package_name: String,
    pub source_rpm: String,
    pub epoch: i32,
    pub os_name: String,
    pub os_id: String,
    pub os_version_id: String,
    pub os_build_id: String,
    pub vendor: String,
    pub architecture: String,
    pub license: String,
}

/// Alpine apk 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApkMetadata {
    pub package_name: String,
    pub origin_name: String,
    pub os_id: String,
    pub os_version_id: String,
    pub maintainer: String,
    pub architecture: String,
    pub license: String,
}

/// Arch Linux pacman 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacmanMetadata {
    pub package_name: String,
    pub package_version: String,
    pub os_id: String,
    pub os_version_id: String,
    /// 쉼표로 구분된 의존성 목록
    pub package_dependencies: String,
}

/// Gentoo portage 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortageMetadata {
    pub package_name: String,
    pub package_version: String,
    pub os_id: String,
    pub os_version_id: String,
}

/// Flatpak 애플리케이션
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatpakMetadata {
    pub package_name: String,
    pub package_id: String,
    pub package_version: String,
    pub release_date: String,
    pub os_name: String,
    pub os_id: String,
    pub os_version_id: String,
    pub os_build_id: String,
    pub developer: String,
}

/// Snap 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapMetadata {
    pub name: String,
    pub version: String,
    pub grade: String,
    /// snap 종류 (app, gadget, kernel, snapd, base, os)
    pub snap_type: String,
    pub architectures: Vec<String>,
    pub os_id: String,
    pub os_version_codename: String,
    pub os_version_id: String,
}

/// Container-Optimized OS 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CosMetadata {
    pub name: String,
    pub version: String,
    pub category: String,
    pub os_version: String,
    pub os_version_id: String,
}

/// Nix 스토어 패키지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NixMetadata {
    pub package_name: String,
    pub package_version: String,
    pub package_hash: String,
    pub package_output: String,
    pub os_id: String,
    pub os_version_codename: String,
    pub os_version_id: String,
}

/// Linux 커널 모듈
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernelModuleMetadata {
    pub package_name: String,
    pub package_version: String,
    pub package_vermagic: String,
    pub package_source_version_identifier: String,
    pub os_id: String,
    pub os_version_codename: String,
    pub os_version_id: String,
    pub package_author: String,
}

/// macOS 애플리케이션 번들 (`Info.plist`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacAppsMetadata {
    pub bundle_display_name: String,
    pub bundle_identifier: String,
    pub bundle_short_version_string: String,
    pub bundle_executable: String,
    pub bundle_name: String,
    pub bundle_package_type: String,
    pub bundle_signature: String,
    pub bundle_version: String,
    pub product_id: String,
    pub update_url: String,
}

/// Windows OS 버전
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowsOsVersion {
    pub product: String,
    pub full_version: String,
}
