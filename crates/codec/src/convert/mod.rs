//! 내장 메타데이터 형태와 자격 증명 종류의 변환기 모음
//!
//! 분류별 파일이 각자의 `register` 함수로 [`Registry`]에 변환기를 추가합니다.
//! 새 형태는 해당 분류 파일에 변환기 한 쌍과 등록 한 줄을 추가하면 됩니다.

mod containers;
mod credential;
mod language;
mod misc;
mod os;

use scanwire_core::purl::PackageUrl;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire;

/// 모든 내장 패키지 메타데이터 변환기를 등록한 레지스트리를 생성합니다.
pub fn builtin_metadata_registry() -> Result<Registry<wire::PackageMetadata>, RegistryError> {
    let mut registry = Registry::new("package metadata");
    register_metadata(&mut registry)?;
    Ok(registry)
}

/// 모든 내장 자격 증명 변환기를 등록한 레지스트리를 생성합니다.
pub fn builtin_secret_registry() -> Result<Registry<wire::SecretKind>, RegistryError> {
    let mut registry = Registry::new("secret");
    credential::register(&mut registry)?;
    Ok(registry)
}

/// 내장 메타데이터 변환기를 기존 레지스트리에 추가합니다.
pub fn register_metadata(
    registry: &mut Registry<wire::PackageMetadata>,
) -> Result<(), RegistryError> {
    os::register(registry)?;
    language::register(registry)?;
    containers::register(registry)?;
    misc::register(registry)?;
    Ok(())
}

// ─── Package URL ───────────────────────────────────────────────────

/// Package URL을 와이어 메시지로 변환합니다. 문자열 형태도 함께 채웁니다.
pub fn purl_to_wire(purl: &PackageUrl) -> wire::Purl {
    wire::Purl {
        purl: purl.to_string(),
        r#type: purl.purl_type.clone(),
        namespace: purl.namespace.clone(),
        name: purl.name.clone(),
        version: purl.version.clone(),
        qualifiers: purl
            .qualifiers
            .iter()
            .map(|(key, value)| wire::Qualifier {
                key: key.clone(),
                value: value.clone(),
            })
            .collect(),
        subpath: purl.subpath.clone(),
    }
}

/// 와이어 메시지를 Package URL로 변환합니다. 구성 요소 필드만 사용합니다.
pub fn purl_to_domain(purl: &wire::Purl) -> PackageUrl {
    PackageUrl {
        purl_type: purl.r#type.clone(),
        namespace: purl.namespace.clone(),
        name: purl.name.clone(),
        version: purl.version.clone(),
        qualifiers: purl
            .qualifiers
            .iter()
            .map(|q| (q.key.clone(), q.value.clone()))
            .collect(),
        subpath: purl.subpath.clone(),
    }
}
