//! 에코시스템별 패키지 메타데이터 형태
//!
//! 각 형태는 서로 독립적인 평범한 구조체이며, [`crate::model::Metadata`]로 감싸
//! 패키지에 붙입니다. 와이어 변환기는 `scanwire-codec`에 형태별로 등록됩니다.
//!
//! | 분류 | 형태 |
//! |------|------|
//! | OS | dpkg, rpm, apk, pacman, portage, flatpak, snap, cos, nix, 커널 모듈, macOS 앱, Windows OS 버전 |
//! | 언어 | Python wheel/egg, requirements, setup, `package.json`, Java 아카이브, Java lockfile, .NET deps.json, OSV, SPDX, CycloneDX |
//! | 컨테이너 | containerd 컨테이너, containerd 런타임, Podman, Docker |
//! | 기타 | Chrome 확장, VS Code 확장 |

mod containers;
mod language;
mod misc;
mod os;

pub use containers::{
    ContainerdContainerMetadata, ContainerdRuntimeMetadata, DockerContainerMetadata, DockerPort,
    PodmanMetadata, PodmanProtocol,
};
pub use language::{
    CdxMetadata, DepsJsonMetadata, JavaArchiveMetadata, JavaLockfileMetadata,
    JavascriptPackageJsonMetadata, OsvMetadata, Person, PythonPackageMetadata,
    PythonRequirementsMetadata, PythonSetupMetadata, SpdxMetadata,
};
pub use misc::{ChromeExtensionMetadata, VscodeExtensionMetadata};
pub use os::{
    ApkMetadata, CosMetadata, DpkgMetadata, FlatpakMetadata, KernelModuleMetadata,
    MacAppsMetadata, NixMetadata, PacmanMetadata, PortageMetadata, RpmMetadata, SnapMetadata,
    WindowsOsVersion,
};
