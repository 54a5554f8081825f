//! 브라우저/에디터 확장 메타데이터 변환기

use scanwire_core::metadata::{ChromeExtensionMetadata, VscodeExtensionMetadata};

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire::{self, PackageMetadata as M};

/// 이 분류의 모든 메타데이터 형태를 등록합니다.
pub fn register(registry: &mut Registry<M>) -> Result<(), RegistryError> {
    registry.register(
        "chrome_extensions_metadata",
        |w| match w {
            M::ChromeExtensionsMetadata(m) => Some(chrome_extension_to_domain(m)),
            _ => None,
        },
        |d: &ChromeExtensionMetadata| M::ChromeExtensionsMetadata(chrome_extension_to_wire(d)),
    )?;
    registry.register(
        "vscode_extensions_metadata",
        |w| match w {
            M::VscodeExtensionsMetadata(m) => Some(vscode_extension_to_domain(m)),
            _ => None,
        },
        |d: &VscodeExtensionMetadata| M::VscodeExtensionsMetadata(vscode_extension_to_wire(d)),
    )?;
    Ok(())
}

fn chrome_extension_to_wire(d: &ChromeExtensionMetadata) -> wire::ChromeExtensionsMetadata {
    wire::ChromeExtensionsMetadata {
        name: d.name.clone(),
        description: d.description.clone(),
        author_email: d.author_email.clone(),
        host_permissions: d.host_permissions.clone(),
        manifest_version: d.manifest_version,
        minimum_chrome_version: d.minimum_chrome_version.clone(),
        permissions: d.permissions.clone(),
        update_url: d.update_url.clone(),
    }
}

fn chrome_extension_to_domain(w: &wire::ChromeExtensionsMetadata) -> ChromeExtensionMetadata {
    ChromeExtensionMetadata {
        name: w.name.clone(),
        description: w.description.clone(),
        author_email: w.author_email.clone(),
        host_permissions: w.host_permissions.clone(),
        manifest_version: w.manifest_version,
        minimum_chrome_version: w.minimum_chrome_version.clone(),
        permissions: w.permissions.clone(),
        update_url: w.update_url.clone(),
    }
}

fn vscode_extension_to_wire(d: &VscodeExtensionMetadata) -> wire::VscodeExtensionsMetadata {
    wire::VscodeExtensionsMetadata {
        id: d.id.clone(),
        publisher_name: d.publisher_name.clone(),
        publisher_display_name: d.publisher_display_name.clone(),
        target_platform: d.target_platform.clone(),
        updated: d.updated,
        is_pre_release_version: d.is_pre_release_version,
        installed_timestamp: d.installed_timestamp,
    }
}

fn vscode_extension_to_domain(w: &wire::VscodeExtensionsMetadata) -> VscodeExtensionMetadata {
    VscodeExtensionMetadata {
        id: w.id.clone(),
        publisher_name: w.publisher_name.clone(),
        publisher_display_name: w.publisher_display_name.clone(),
        target_platform: w.target_platform.clone(),
        updated: w.updated,
        is_pre_release_version: w.is_pre_release_version,
        installed_timestamp: w.installed_timestamp,
    }
}
