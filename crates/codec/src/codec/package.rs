//! 패키지 인코딩/디코딩

use scanwire_core::model::{ContainerImageMetadata, Metadata, Package, SourceCodeIdentifier};

use super::InventoryCodec;
use crate::convert::purl_to_wire;
use crate::error::CodecError;
use crate::identity::{layer_indexes, resolve_layer};
use crate::wire;

impl InventoryCodec {
    /// 패키지를 주어진 식별자로 인코딩합니다.
    pub(crate) fn encode_package(&self, pkg: &Package, id: String) -> Result<wire::Package, CodecError> {
        let metadata = pkg
            .metadata
            .as_ref()
            .map(|m| self.metadata.encode(m.as_payload()))
            .transpose()?;
        let exploitability_signals = pkg
            .exploitability_signals
            .iter()
            .map(|signal| self.encode_package_signal(signal))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(wire::Package {
            id,
            name: pkg.name.clone(),
            version: pkg.version.clone(),
            source_code: pkg
                .source_code
                .as_ref()
                .map(|s| wire::SourceCodeIdentifier {
                    repo: s.repo.clone(),
                    commit: s.commit.clone(),
                }),
            purl: self.encode_purl(pkg),
            ecosystem: pkg.ecosystem().to_owned(),
            locations: pkg.locations.clone(),
            plugins: pkg.plugins.clone(),
            licenses: pkg.licenses.clone(),
            annotations: pkg
                .annotations
                .iter()
                .map(|a| self.tables.annotation.to_wire(*a) as i32)
                .collect(),
            exploitability_signals,
            container_image_metadata_indexes: pkg.layer.map(layer_indexes),
            metadata,
        })
    }

    // 와이어 `type`은 도메인 값을 그대로 싣는다. 이름이 없어도 유형만 담긴 purl을 남긴다.
    fn encode_purl(&self, pkg: &Package) -> Option<wire::Purl> {
        if pkg.purl_type.is_empty() {
            return None;
        }
        let purl = pkg.purl().map(|purl| purl_to_wire(&purl)).unwrap_or_default();
        Some(wire::Purl {
            r#type: pkg.purl_type.clone(),
            ..purl
        })
    }

    /// 패키지를 디코딩합니다. 레이어 인덱스 쌍은 이미 디코딩된 컨테이너 목록으로 검증합니다.
    pub(crate) fn decode_package(
        &self,
        wire: &wire::Package,
        containers: &[ContainerImageMetadata],
    ) -> Package {
        Package {
            name: wire.name.clone(),
            version: wire.version.clone(),
            source_code: wire
                .source_code
                .as_ref()
                .map(|s| SourceCodeIdentifier {
                    repo: s.repo.clone(),
                    commit: s.commit.clone(),
                }),
            purl_type: wire
                .purl
                .as_ref()
                .map(|p| p.r#type.clone())
                .unwrap_or_default(),
            locations: wire.locations.clone(),
            plugins: wire.plugins.clone(),
            licenses: wire.licenses.clone(),
            annotations: wire
                .annotations
                .iter()
                .map(|a| {
                    let annotation = wire::PackageAnnotation::try_from(*a).unwrap_or_default();
                    self.tables.annotation.to_domain(annotation)
                })
                .collect(),
            metadata: wire
                .metadata
                .as_ref()
                .and_then(|m| self.metadata.decode(m))
                .map(Metadata::from_boxed),
            exploitability_signals: wire
                .exploitability_signals
                .iter()
                .map(|signal| self.decode_package_signal(signal))
                .collect(),
            layer: wire
                .container_image_metadata_indexes
                .as_ref()
                .and_then(|indexes| resolve_layer(containers, indexes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwire_core::metadata::DpkgMetadata;
    use scanwire_core::model::{Annotation, LayerMetadata, LayerRef};

    fn codec() -> InventoryCodec {
        InventoryCodec::new().unwrap()
    }

    fn bash() -> Package {
        Package {
            name: "bash".to_owned(),
            version: "4.4-150400.25.22".to_owned(),
            purl_type: "deb".to_owned(),
            locations: vec!["var/lib/dpkg/status".to_owned()],
            plugins: vec!["os/dpkg".to_owned()],
            licenses: vec!["GPL-3.0-or-later".to_owned()],
            annotations: vec![Annotation::InsideOsPackage],
            metadata: Some(Metadata::new(DpkgMetadata {
                package_name: "bash".to_owned(),
                source_name: "bash".to_owned(),
                package_version: "4.4-150400.25.22".to_owned(),
                os_id: "debian".to_owned(),
                os_version_codename: "bookworm".to_owned(),
                architecture: "amd64".to_owned(),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    #[test]
    fn encode_fills_id_purl_and_ecosystem() {
        let wire = codec().encode_package(&bash(), "pkg-1".to_owned()).unwrap();
        assert_eq!(wire.id, "pkg-1");
        assert_eq!(wire.ecosystem, "Debian");
        assert_eq!(
            wire.purl.as_ref().map(|p| p.purl.as_str()),
            Some("pkg:deb/bash@4.4-150400.25.22")
        );
        assert_eq!(wire.annotations, vec![wire::PackageAnnotation::InsideOsPackage as i32]);
        assert!(matches!(
            wire.metadata,
            Some(wire::PackageMetadata::DpkgMetadata(_))
        ));
    }

    #[test]
    fn package_roundtrip() {
        let codec = codec();
        let pkg = bash();
        let wire = codec.encode_package(&pkg, "pkg-1".to_owned()).unwrap();
        assert_eq!(codec.decode_package(&wire, &[]), pkg);
    }

    #[test]
    fn purl_type_survives_without_name() {
        let codec = codec();
        let pkg = Package {
            purl_type: "deb".to_owned(),
            version: "1.0".to_owned(),
            ..Default::default()
        };
        let wire = codec.encode_package(&pkg, "pkg-1".to_owned()).unwrap();
        let purl = wire.purl.as_ref().unwrap();
        assert_eq!(purl.r#type, "deb");
        assert_eq!(purl.purl, "");
        assert_eq!(codec.decode_package(&wire, &[]), pkg);
    }

    #[test]
    fn purl_type_keeps_its_case() {
        let codec = codec();
        let pkg = Package {
            name: "requests".to_owned(),
            version: "2.31.0".to_owned(),
            purl_type: "PyPI".to_owned(),
            ..Default::default()
        };
        let wire = codec.encode_package(&pkg, "pkg-1".to_owned()).unwrap();
        let purl = wire.purl.as_ref().unwrap();
        assert_eq!(purl.purl, "pkg:pypi/requests@2.31.0");
        assert_eq!(purl.r#type, "PyPI");
        assert_eq!(codec.decode_package(&wire, &[]).purl_type, "PyPI");
    }

    #[test]
    fn empty_purl_type_writes_no_purl() {
        let wire = codec()
            .encode_package(
                &Package {
                    name: "x".to_owned(),
                    ..Default::default()
                },
                "pkg-1".to_owned(),
            )
            .unwrap();
        assert!(wire.purl.is_none());
    }

    #[test]
    fn unknown_annotation_value_becomes_unknown() {
        let codec = codec();
        let wire = wire::Package {
            name: "x".to_owned(),
            annotations: vec![42],
            ..Default::default()
        };
        assert_eq!(
            codec.decode_package(&wire, &[]).annotations,
            vec![Annotation::Unknown]
        );
    }

    #[test]
    fn unset_metadata_decodes_to_none() {
        let codec = codec();
        let wire = wire::Package {
            name: "x".to_owned(),
            ..Default::default()
        };
        assert!(codec.decode_package(&wire, &[]).metadata.is_none());
    }

    #[test]
    fn layer_reference_is_validated_against_containers() {
        let codec = codec();
        let containers = vec![ContainerImageMetadata {
            layer_metadata: vec![LayerMetadata::default(); 2],
            ..Default::default()
        }];
        let mut pkg = bash();
        pkg.layer = Some(LayerRef {
            container_index: 0,
            layer_index: 1,
        });
        let wire = codec.encode_package(&pkg, "pkg-1".to_owned()).unwrap();
        assert_eq!(codec.decode_package(&wire, &containers).layer, pkg.layer);

        pkg.layer = Some(LayerRef {
            container_index: 0,
            layer_index: 5,
        });
        let wire = codec.encode_package(&pkg, "pkg-1".to_owned()).unwrap();
        assert_eq!(codec.decode_package(&wire, &containers).layer, None);
    }
}
