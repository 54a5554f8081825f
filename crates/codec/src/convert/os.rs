//! OS 패키지 관리자 메타데이터 변환기

use scanwire_core::metadata::{
    ApkMetadata, CosMetadata, DpkgMetadata, FlatpakMetadata, KernelModuleMetadata,
    MacAppsMetadata, NixMetadata, PacmanMetadata, PortageMetadata, RpmMetadata, SnapMetadata,
    WindowsOsVersion,
};

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire::{self, PackageMetadata as M};

/// 이 분류의 모든 메타데이터 형태를 등록합니다.
pub fn register(registry: &mut Registry<M>) -> Result<(), RegistryError> {
    registry.register(
        "dpkg_metadata",
        |w| match w {
            M::DpkgMetadata(m) => Some(dpkg_to_domain(m)),
            _ => None,
        },
        |d: &DpkgMetadata| M::DpkgMetadata(dpkg_to_wire(d)),
    )?;
    registry.register(
        "rpm_metadata",
        |w| match w {
            M::RpmMetadata(m) => Some(rpm_to_domain(m)),
            _ => None,
        },
        |d: &RpmMetadata| M::RpmMetadata(rpm_to_wire(d)),
    )?;
    registry.register(
        "apk_metadata",
        |w| match w {
            M::ApkMetadata(m) => Some(apk_to_domain(m)),
            _ => None,
        },
        |d: &ApkMetadata| M::ApkMetadata(apk_to_wire(d)),
    )?;
    registry.register(
        "pacman_metadata",
        |w| match w {
            M::PacmanMetadata(m) => Some(pacman_to_domain(m)),
            _ => None,
        },
        |d: &PacmanMetadata| M::PacmanMetadata(pacman_to_wire(d)),
    )?;
    registry.register(
        "portage_metadata",
        |w| match w {
            M::PortageMetadata(m) => Some(portage_to_domain(m)),
            _ => None,
        },
        |d: &PortageMetadata| M::PortageMetadata(portage_to_wire(d)),
    )?;
    registry.register(
        "flatpak_metadata",
        |w| match w {
            M::FlatpakMetadata(m) => Some(flatpak_to_domain(m)),
            _ => None,
        },
        |d: &FlatpakMetadata| M::FlatpakMetadata(flatpak_to_wire(d)),
    )?;
    registry.register(
        "snap_metadata",
        |w| match w {
            M::SnapMetadata(m) => Some(snap_to_domain(m)),
            _ => None,
        },
        |d: &SnapMetadata| M::SnapMetadata(snap_to_wire(d)),
    )?;
    registry.register(
        "cos_metadata",
        |w| match w {
            M::CosMetadata(m) => Some(cos_to_domain(m)),
            _ => None,
        },
        |d: &CosMetadata| M::CosMetadata(cos_to_wire(d)),
    )?;
    registry.register(
        "nix_metadata",
        |w| match w {
            M::NixMetadata(m) => Some(nix_to_domain(m)),
            _ => None,
        },
        |d: &NixMetadata| M::NixMetadata(nix_to_wire(d)),
    )?;
    registry.register(
        "kernel_module_metadata",
        |w| match w {
            M::KernelModuleMetadata(m) => Some(kernel_module_to_domain(m)),
            _ => None,
        },
        |d: &KernelModuleMetadata| M::KernelModuleMetadata(kernel_module_to_wire(d)),
    )?;
    registry.register(
        "mac_apps_metadata",
        |w| match w {
            M::MacAppsMetadata(m) => Some(mac_apps_to_domain(m)),
            _ => None,
        },
        |d: &MacAppsMetadata| M::MacAppsMetadata(mac_apps_to_wire(d)),
    )?;
    registry.register(
        "windows_os_version_metadata",
        |w| match w {
            M::WindowsOsVersionMetadata(m) => Some(windows_os_version_to_domain(m)),
            _ => None,
        },
        |d: &WindowsOsVersion| M::WindowsOsVersionMetadata(windows_os_version_to_wire(d)),
    )?;
    Ok(())
}

fn dpkg_to_wire(d: &DpkgMetadata) -> wire::DpkgPackageMetadata {
    wire::DpkgPackageMetadata {
        package_name: d.package_name.clone(),
        source_name: d.source_name.clone(),
        source_version: d.source_version.clone(),
        package_version: d.package_version.clone(),
        os_id: d.os_id.clone(),
        os_version_codename: d.os_version_codename.clone(),
        os_version_id: d.os_version_id.clone(),
        maintainer: d.maintainer.clone(),
        architecture: d.architecture.clone(),
        status: d.status.clone(),
    }
}

fn dpkg_to_domain(w: &wire::DpkgPackageMetadata) -> DpkgMetadata {
    DpkgMetadata {
        package_name: w.package_name.clone(),
        source_name: w.source_name.clone(),
        source_version: w.source_version.clone(),
        package_version: w.package_version.clone(),
        os_id: w.os_id.clone(),
        os_version_codename: w.os_version_codename.clone(),
        os_version_id: w.os_version_id.clone(),
        maintainer: w.maintainer.clone(),
        architecture: w.architecture.clone(),
        status: w.status.clone(),
    }
}

fn rpm_to_wire(d: &RpmMetadata) -> wire::RpmPackageMetadata {
    wire::RpmPackageMetadata {
        package_name: d.package_name.clone(),
        source_rpm: d.source_rpm.clone(),
        epoch: d.epoch,
        os_name: d.os_name.clone(),
        os_id: d.os_id.clone(),
        os_version_id: d.os_version_id.clone(),
        os_build_id: d.os_build_id.clone(),
        vendor: d.vendor.clone(),
        architecture: d.architecture.clone(),
        license: d.license.clone(),
    }
}

fn rpm_to_domain(w: &wire::RpmPackageMetadata) -> RpmMetadata {
    RpmMetadata {
        package_name: w.package_name.clone(),
        source_rpm: w.source_rpm.clone(),
        epoch: w.epoch,
        os_name: w.os_name.clone(),
        os_id: w.os_id.clone(),
        os_version_id: w.os_version_id.clone(),
        os_build_id: w.os_build_id.clone(),
        vendor: w.vendor.clone(),
        architecture: w.architecture.clone(),
        license: w.license.clone(),
    }
}

fn apk_to_wire(d: &ApkMetadata) -> wire::ApkPackageMetadata {
    wire::ApkPackageMetadata {
        package_name: d.package_name.clone(),
        origin_name: d.origin_name.clone(),
        os_id: d.os_id.clone(),
        os_version_id: d.os_version_id.clone(),
        maintainer: d.maintainer.clone(),
        architecture: d.architecture.clone(),
        license: d.license.clone(),
    }
}

fn apk_to_domain(w: &wire::ApkPackageMetadata) -> ApkMetadata {
    ApkMetadata {
        package_name: w.package_name.clone(),
        origin_name: w.origin_name.clone(),
        os_id: w.os_id.clone(),
        os_version_id: w.os_version_id.clone(),
        maintainer: w.maintainer.clone(),
        architecture: w.architecture.clone(),
        license: w.license.clone(),
    }
}

fn pacman_to_wire(d: &PacmanMetadata) -> wire::PacmanPackageMetadata {
    wire::PacmanPackageMetadata {
        package_name: d.package_name.clone(),
        package_version: d.package_version.clone(),
        os_id: d.os_id.clone(),
        os_version_id: d.os_version_id.clone(),
        package_dependencies: d.package_dependencies.clone(),
    }
}

fn pacman_to_domain(w: &wire::PacmanPackageMetadata) -> PacmanMetadata {
    PacmanMetadata {
        package_name: w.package_name.clone(),
        package_version: w.package_version.clone(),
        os_id: w.os_id.clone(),
        os_version_id: w.os_version_id.clone(),
        package_dependencies: w.package_dependencies.clone(),
    }
}

fn portage_to_wire(d: &PortageMetadata) -> wire::PortagePackageMetadata {
    wire::PortagePackageMetadata {
        package_name: d.package_name.clone(),
        package_version: d.package_version.clone(),
        os_id: d.os_id.clone(),
        os_version_id: d.os_version_id.clone(),
    }
}

fn portage_to_domain(w: &wire::PortagePackageMetadata) -> PortageMetadata {
    PortageMetadata {
        package_name: w.package_name.clone(),
        package_version: w.package_version.clone(),
        os_id: w.os_id.clone(),
        os_version_id: w.os_version_id.clone(),
    }
}

fn flatpak_to_wire(d: &FlatpakMetadata) -> wire::FlatpakPackageMetadata {
    wire::FlatpakPackageMetadata {
        package_name: d.package_name.clone(),
        package_id: d.package_id.clone(),
        package_version: d.package_version.clone(),
        release_date: d.release_date.clone(),
        os_name: d.os_name.clone(),
        os_id: d.os_id.clone(),
        os_version_id: d.os_version_id.clone(),
        os_build_id: d.os_build_id.clone(),
        developer: d.developer.clone(),
    }
}

fn flatpak_to_domain(w: &wire::FlatpakPackageMetadata) -> FlatpakMetadata {
    FlatpakMetadata {
        package_name: w.package_name.clone(),
        package_id: w.package_id.clone(),
        package_version: w.package_version.clone(),
        release_date: w.release_date.clone(),
        os_name: w.os_name.clone(),
        os_id: w.os_id.clone(),
        os_version_id: w.os_version_id.clone(),
        os_build_id: w.os_build_id.clone(),
        developer: w.developer.clone(),
    }
}

fn snap_to_wire(d: &SnapMetadata) -> wire::SnapPackageMetadata {
    wire::SnapPackageMetadata {
        name: d.name.clone(),
        version: d.version.clone(),
        grade: d.grade.clone(),
        r#type: d.snap_type.clone(),
        architectures: d.architectures.clone(),
        os_id: d.os_id.clone(),
        os_version_codename: d.os_version_codename.clone(),
        os_version_id: d.os_version_id.clone(),
    }
}

fn snap_to_domain(w: &wire::SnapPackageMetadata) -> SnapMetadata {
    SnapMetadata {
        name: w.name.clone(),
        version: w.version.clone(),
        grade: w.grade.clone(),
        snap_type: w.r#type.clone(),
        architectures: w.architectures.clone(),
        os_id: w.os_id.clone(),
        os_version_codename: w.os_version_codename.clone(),
        os_version_id: w.os_version_id.clone(),
    }
}

fn cos_to_wire(d: &CosMetadata) -> wire::CosPackageMetadata {
    wire::CosPackageMetadata {
        name: d.name.clone(),
        version: d.version.clone(),
        category: d.category.clone(),
        os_version: d.os_version.clone(),
        os_version_id: d.os_version_id.clone(),
    }
}

fn cos_to_domain(w: &wire::CosPackageMetadata) -> CosMetadata {
    CosMetadata {
        name: w.name.clone(),
        version: w.version.clone(),
        category: w.category.clone(),
        os_version: w.os_version.clone(),
        os_version_id: w.os_version_id.clone(),
    }
}

fn nix_to_wire(d: &NixMetadata) -> wire::NixPackageMetadata {
    wire::NixPackageMetadata {
        package_name: d.package_name.clone(),
        package_version: d.package_version.clone(),
        package_hash: d.package_hash.clone(),
        package_output: d.package_output.clone(),
        os_id: d.os_id.clone(),
        os_version_codename: d.os_version_codename.clone(),
        os_version_id: d.os_version_id.clone(),
    }
}

fn nix_to_domain(w: &wire::NixPackageMetadata) -> NixMetadata {
    NixMetadata {
        package_name: w.package_name.clone(),
        package_version: w.package_version.clone(),
        package_hash: w.package_hash.clone(),
        package_output: w.package_output.clone(),
        os_id: w.os_id.clone(),
        os_version_codename: w.os_version_codename.clone(),
        os_version_id: w.os_version_id.clone(),
    }
}

fn kernel_module_to_wire(d: &KernelModuleMetadata) -> wire::KernelModuleMetadata {
    wire::KernelModuleMetadata {
        package_name: d.package_name.clone(),
        package_version: d.package_version.clone(),
        package_vermagic: d.package_vermagic.clone(),
        package_source_version_identifier: d.package_source_version_identifier.clone(),
        os_id: d.os_id.clone(),
        os_version_codename: d.os_version_codename.clone(),
        os_version_id: d.os_version_id.clone(),
        package_author: d.package_author.clone(),
    }
}

fn kernel_module_to_domain(w: &wire::KernelModuleMetadata) -> KernelModuleMetadata {
    KernelModuleMetadata {
        package_name: w.package_name.clone(),
        package_version: w.package_version.clone(),
        package_vermagic: w.package_vermagic.clone(),
        package_source_version_identifier: w.package_source_version_identifier.clone(),
        os_id: w.os_id.clone(),
        os_version_codename: w.os_version_codename.clone(),
        os_version_id: w.os_version_id.clone(),
        package_author: w.package_author.clone(),
    }
}

fn mac_apps_to_wire(d: &MacAppsMetadata) -> wire::MacAppsMetadata {
    wire::MacAppsMetadata {
        bundle_display_name: d.bundle_display_name.clone(),
        bundle_identifier: d.bundle_identifier.clone(),
        bundle_short_version_string: d.bundle_short_version_string.clone(),
        bundle_executable: d.bundle_executable.clone(),
        bundle_name: d.bundle_name.clone(),
        bundle_package_type: d.bundle_package_type.clone(),
        bundle_signature: d.bundle_signature.clone(),
        bundle_version: d.bundle_version.clone(),
        product_id: d.product_id.clone(),
        update_url: d.update_url.clone(),
    }
}

fn mac_apps_to_domain(w: &wire::MacAppsMetadata) -> MacAppsMetadata {
    MacAppsMetadata {
        bundle_display_name: w.bundle_display_name.clone(),
        bundle_identifier: w.bundle_identifier.clone(),
        bundle_short_version_string: w.bundle_short_version_string.clone(),
        bundle_executable: w.bundle_executable.clone(),
        bundle_name: w.bundle_name.clone(),
        bundle_package_type: w.bundle_package_type.clone(),
        bundle_signature: w.bundle_signature.clone(),
        bundle_version: w.bundle_version.clone(),
        product_id: w.product_id.clone(),
        update_url: w.update_url.clone(),
    }
}

fn windows_os_version_to_wire(d: &WindowsOsVersion) -> wire::WindowsOsVersion {
    wire::WindowsOsVersion {
        product: d.product.clone(),
        full_version: d.full_version.clone(),
    }
}

fn windows_os_version_to_domain(w: &wire::WindowsOsVersion) -> WindowsOsVersion {
    WindowsOsVersion {
        product: w.product.clone(),
        full_version: w.full_version.clone(),
    }
}
