//! 식별자 해석 — 컬렉션 간 참조의 평탄화와 복원
//!
//! - 패키지 ↔ 취약점: 인코딩 시 패키지마다 UUID v4를 발급하고, 취약점은 그 값을 참조합니다.
//!   인코딩 쪽은 `Arc` 포인터 동일성으로, 디코딩 쪽은 식별자 문자열로 패키지를 찾습니다.
//! - 패키지 → 레이어, 레이어 → 컨테이너: 위치 인덱스로 평탄화하고,
//!   모든 컨테이너를 디코딩한 뒤 한 번에 복원합니다.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use metrics::counter;
use scanwire_core::metrics::{
    CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON, REASON_DUPLICATE_PACKAGE_ID,
    REASON_LAYER_OUT_OF_RANGE,
};
use scanwire_core::model::{ContainerImageMetadata, LayerRef, Package};
use tracing::warn;
use uuid::Uuid;

use crate::error::CodecError;
use crate::wire;

/// 새 패키지 식별자를 발급합니다 (UUID v4 문자열).
pub fn new_package_id() -> String {
    Uuid::new_v4().to_string()
}

// ─── 인코딩: 패키지 -> 식별자 ──────────────────────────────────────

/// `Arc<Package>` 할당 주소로 키를 잡는 패키지 식별자 맵
///
/// 같은 내용의 패키지라도 다른 할당이면 다른 패키지로 취급합니다.
/// 키 포인터는 역참조하지 않으며, 맵은 인코딩 한 번 동안만 유지됩니다.
#[derive(Debug, Default)]
pub struct PackageIdMap {
    ids: HashMap<*const Package, String>,
}

impl PackageIdMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// 패키지에 식별자를 연결합니다.
    pub fn insert(&mut self, package: &Arc<Package>, id: String) {
        self.ids.insert(Arc::as_ptr(package), id);
    }

    /// 패키지의 식별자를 조회합니다.
    pub fn get(&self, package: &Arc<Package>) -> Option<&str> {
        self.ids.get(&Arc::as_ptr(package)).map(String::as_str)
    }

    /// 패키지의 식별자를 조회하고, 없으면 `PackageNotFound`를 반환합니다.
    pub fn resolve(&self, package: &Arc<Package>) -> Result<&str, CodecError> {
        self.get(package).ok_or_else(|| CodecError::PackageNotFound {
            name: package.name.clone(),
            version: package.version.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ─── 디코딩: 식별자 -> 패키지 ──────────────────────────────────────

/// 디코딩된 패키지 목록의 식별자 색인
///
/// 같은 식별자가 여러 번 나오면 목록 순서상 첫 패키지가 이깁니다.
#[derive(Debug, Default)]
pub struct PackageIndex {
    by_id: HashMap<String, Arc<Package>>,
}

impl PackageIndex {
    /// (식별자, 패키지) 쌍 목록으로 색인을 만듭니다. 빈 식별자는 색인하지 않습니다.
    pub fn build<'a>(entries: impl IntoIterator<Item = (&'a str, &'a Arc<Package>)>) -> Self {
        let mut by_id = HashMap::new();
        for (id, package) in entries {
            if id.is_empty() {
                continue;
            }
            match by_id.entry(id.to_owned()) {
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(package));
                }
                Entry::Occupied(existing) => {
                    warn!(
                        package_id = id,
                        kept = %existing.get().name,
                        ignored = %package.name,
                        "duplicate package id, keeping the first package"
                    );
                    counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_DUPLICATE_PACKAGE_ID)
                        .increment(1);
                }
            }
        }
        Self { by_id }
    }

    /// 식별자로 패키지를 찾습니다. 빈 식별자나 없는 식별자는 `None`입니다.
    pub fn resolve(&self, id: &str) -> Option<Arc<Package>> {
        if id.is_empty() {
            return None;
        }
        self.by_id.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ─── 레이어 ↔ 컨테이너 ─────────────────────────────────────────────

/// 레이어 참조를 와이어 인덱스 쌍으로 평탄화합니다.
pub fn layer_indexes(layer: LayerRef) -> wire::ContainerImageMetadataIndexes {
    wire::ContainerImageMetadataIndexes {
        container_image_index: i32::try_from(layer.container_index).unwrap_or(i32::MAX),
        layer_index: i32::try_from(layer.layer_index).unwrap_or(i32::MAX),
    }
}

/// 모든 레이어의 소유 컨테이너 역참조를 목록 위치로 설정합니다.
pub fn link_layers(containers: &mut [ContainerImageMetadata]) {
    for (index, container) in containers.iter_mut().enumerate() {
        for layer in &mut container.layer_metadata {
            layer.parent_container = Some(index);
        }
    }
}

/// 와이어 인덱스 쌍을 디코딩된 컨테이너 목록에 대해 검증하고 레이어 참조로 바꿉니다.
///
/// 범위를 벗어나면 경고 후 `None` (레이어 연관 없음)입니다.
pub fn resolve_layer(
    containers: &[ContainerImageMetadata],
    indexes: &wire::ContainerImageMetadataIndexes,
) -> Option<LayerRef> {
    let resolved = usize::try_from(indexes.container_image_index)
        .ok()
        .zip(usize::try_from(indexes.layer_index).ok())
        .filter(|(container_index, layer_index)| {
            containers
                .get(*container_index)
                .is_some_and(|c| c.layer(*layer_index).is_some())
        })
        .map(|(container_index, layer_index)| LayerRef {
            container_index,
            layer_index,
        });

    if resolved.is_none() {
        warn!(
            container_image_index = indexes.container_image_index,
            layer_index = indexes.layer_index,
            containers = containers.len(),
            "layer reference out of range, dropping layer association"
        );
        counter!(CODEC_DECODE_DEGRADED_TOTAL, LABEL_REASON => REASON_LAYER_OUT_OF_RANGE)
            .increment(1);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwire_core::model::LayerMetadata;

    fn pkg(name: &str) -> Arc<Package> {
        Arc::new(Package {
            name: name.to_owned(),
            version: "1.0".to_owned(),
            ..Default::default()
        })
    }

    fn containers(layer_counts: &[usize]) -> Vec<ContainerImageMetadata> {
        layer_counts
            .iter()
            .map(|n| ContainerImageMetadata {
                layer_metadata: vec![LayerMetadata::default(); *n],
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn new_package_id_is_unique_uuid() {
        let a = new_package_id();
        let b = new_package_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn package_id_map_uses_pointer_identity() {
        let original = pkg("zlib");
        let lookalike = pkg("zlib");
        let mut ids = PackageIdMap::default();
        ids.insert(&original, "id-1".to_owned());

        assert_eq!(ids.get(&Arc::clone(&original)), Some("id-1"));
        assert!(ids.get(&lookalike).is_none());
        let err = ids.resolve(&lookalike).unwrap_err();
        assert!(matches!(err, CodecError::PackageNotFound { ref name, .. } if name == "zlib"));
    }

    #[test]
    fn package_index_first_duplicate_wins() {
        let first = pkg("first");
        let second = pkg("second");
        let index = PackageIndex::build([("dup", &first), ("dup", &second)]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("dup").unwrap().name, "first");
    }

    #[test]
    fn package_index_ignores_empty_ids() {
        let p = pkg("p");
        let index = PackageIndex::build([("", &p)]);
        assert!(index.is_empty());
        assert!(index.resolve("").is_none());
        assert!(index.resolve("missing").is_none());
    }

    #[test]
    fn link_layers_sets_parent_by_position() {
        let mut list = containers(&[2, 3]);
        link_layers(&mut list);
        assert!(list[0].layer_metadata.iter().all(|l| l.parent_container == Some(0)));
        assert!(list[1].layer_metadata.iter().all(|l| l.parent_container == Some(1)));
    }

    #[test]
    fn resolve_layer_accepts_in_range_pairs() {
        let list = containers(&[1, 4]);
        let indexes = wire::ContainerImageMetadataIndexes {
            container_image_index: 1,
            layer_index: 3,
        };
        assert_eq!(
            resolve_layer(&list, &indexes),
            Some(LayerRef {
                container_index: 1,
                layer_index: 3
            })
        );
    }

    #[test]
    fn resolve_layer_rejects_out_of_range_and_negative() {
        let list = containers(&[2]);
        for (c, l) in [(0, 2), (1, 0), (-1, 0), (0, -3)] {
            let indexes = wire::ContainerImageMetadataIndexes {
                container_image_index: c,
                layer_index: l,
            };
            assert!(resolve_layer(&list, &indexes).is_none(), "({c}, {l})");
        }
    }

    #[test]
    fn layer_indexes_roundtrip_through_resolve() {
        let list = containers(&[3]);
        let layer = LayerRef {
            container_index: 0,
            layer_index: 2,
        };
        assert_eq!(resolve_layer(&list, &layer_indexes(layer)), Some(layer));
    }
}
