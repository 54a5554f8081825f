//! 패키지와 패키지 메타데이터 페이로드

use std::fmt;

use crate::model::vex::PackageExploitabilitySignal;
use crate::payload::Payload;
use crate::purl::{self, PackageUrl};

/// 패키지별 에코시스템 메타데이터 (타입 소거)
///
/// 구체 타입은 [`crate::metadata`]의 형태 중 하나이거나,
/// 코덱 레지스트리에 등록된 외부 타입입니다.
pub struct Metadata(Box<dyn Payload>);

impl Metadata {
    /// 구체 메타데이터 값을 감쌉니다.
    pub fn new<T: Payload>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// 이미 박싱된 페이로드를 감쌉니다 (코덱 디코딩 경로).
    pub fn from_boxed(value: Box<dyn Payload>) -> Self {
        Self(value)
    }

    /// 구체 타입으로 다운캐스트합니다.
    pub fn downcast_ref<T: Payload>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// 구체 타입이 `T`인지 확인합니다.
    pub fn is<T: Payload>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// 내부 페이로드 참조
    pub fn as_payload(&self) -> &dyn Payload {
        self.0.as_ref()
    }

    /// 구체 타입 이름
    pub fn type_name(&self) -> &'static str {
        self.0.payload_type_name()
    }
}

impl Clone for Metadata {
    fn clone(&self) -> Self {
        Self(self.0.clone_boxed())
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Metadata").field(&self.0).finish()
    }
}

/// 소스 코드 식별자 (저장소 + 커밋)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCodeIdentifier {
    /// 저장소 URL
    pub repo: String,
    /// 커밋 해시
    pub commit: String,
}

/// 패키지 주석 (추출 맥락에 대한 부가 정보)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// 알 수 없음
    #[default]
    Unknown,
    /// 빌드 중 임시로 존재하는 패키지
    Transitional,
    /// OS 패키지가 소유한 파일에서 발견됨
    InsideOsPackage,
    /// 캐시 디렉토리에서 발견됨
    InsideCacheDir,
}

/// 컨테이너 이미지 레이어 참조
///
/// 인벤토리의 컨테이너 목록 인덱스와 해당 컨테이너의 레이어 목록 인덱스입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerRef {
    /// `Inventory::container_image_metadata` 인덱스
    pub container_index: usize,
    /// `ContainerImageMetadata::layer_metadata` 인덱스
    pub layer_index: usize,
}

/// 스캔에서 발견된 소프트웨어 패키지
///
/// 인벤토리와 [`crate::model::PackageVuln`]이 `Arc<Package>`로 공유합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
    /// 패키지 이름
    pub name: String,
    /// 패키지 버전
    pub version: String,
    /// 소스 코드 식별자
    pub source_code: Option<SourceCodeIdentifier>,
    /// Package URL 타입 (예: `deb`, `npm`, `pypi`)
    pub purl_type: String,
    /// 패키지가 발견된 경로
    pub locations: Vec<String>,
    /// 패키지를 찾은 플러그인 이름
    pub plugins: Vec<String>,
    /// 라이선스 목록
    pub licenses: Vec<String>,
    /// 추출 맥락 주석
    pub annotations: Vec<Annotation>,
    /// 에코시스템 메타데이터 (최대 하나)
    pub metadata: Option<Metadata>,
    /// VEX 신호
    pub exploitability_signals: Vec<PackageExploitabilitySignal>,
    /// 패키지가 속한 컨테이너 이미지 레이어
    pub layer: Option<LayerRef>,
}

impl Package {
    /// 메타데이터를 구체 타입으로 조회합니다.
    pub fn metadata_as<T: Payload>(&self) -> Option<&T> {
        self.metadata.as_ref().and_then(Metadata::downcast_ref::<T>)
    }

    /// Package URL 타입에서 유도한 에코시스템 이름 (알 수 없으면 빈 문자열)
    pub fn ecosystem(&self) -> &'static str {
        purl::ecosystem_for_type(&self.purl_type)
    }

    /// Package URL을 생성합니다. `purl_type` 또는 이름이 비어 있으면 `None`입니다.
    pub fn purl(&self) -> Option<PackageUrl> {
        PackageUrl::for_package(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestMetadata {
        arch: String,
    }

    fn package_with_metadata(arch: &str) -> Package {
        Package {
            name: "bash".to_owned(),
            version: "5.2".to_owned(),
            purl_type: "deb".to_owned(),
            metadata: Some(Metadata::new(TestMetadata {
                arch: arch.to_owned(),
            })),
            ..Default::default()
        }
    }

    #[test]
    fn metadata_as_downcasts_to_concrete_type() {
        let pkg = package_with_metadata("amd64");
        let meta = pkg.metadata_as::<TestMetadata>().unwrap();
        assert_eq!(meta.arch, "amd64");
        assert!(pkg.metadata_as::<String>().is_none());
    }

    #[test]
    fn package_equality_includes_metadata_value() {
        assert_eq!(package_with_metadata("amd64"), package_with_metadata("amd64"));
        assert_ne!(package_with_metadata("amd64"), package_with_metadata("arm64"));
    }

    #[test]
    fn metadata_clone_is_deep() {
        let original = Metadata::new(TestMetadata {
            arch: "x86".to_owned(),
        });
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert!(cloned.is::<TestMetadata>());
    }

    #[test]
    fn metadata_debug_shows_inner_value() {
        let meta = Metadata::new(TestMetadata {
            arch: "riscv64".to_owned(),
        });
        assert!(format!("{meta:?}").contains("riscv64"));
    }

    #[test]
    fn ecosystem_follows_purl_type() {
        let pkg = package_with_metadata("amd64");
        assert_eq!(pkg.ecosystem(), "Debian");
    }
}
