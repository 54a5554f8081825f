//! 컨테이너 이미지 메타데이터 인코딩/디코딩
//!
//! 베이스 이미지 체인의 첫 항목은 구조상 자리표시자입니다.
//! 인코딩 시 빈 체인으로 다시 만들고, 디코딩 시 와이어의 첫 항목은 읽지 않습니다.

use scanwire_core::model::{
    BaseImageChain, BaseImageDetails, ContainerImageMetadata, LayerMetadata,
};

use tracing::warn;

use super::{InventoryCodec, digest_to_wire, parse_digest};
use crate::wire;

impl InventoryCodec {
    /// 컨테이너를 인코딩합니다. 와이어 `index`에는 인벤토리 내 위치 `position`을 씁니다.
    pub(crate) fn encode_container(
        &self,
        position: usize,
        container: &ContainerImageMetadata,
    ) -> wire::ContainerImageMetadata {
        let base_image_chains = if container.base_image_chains.is_empty() {
            Vec::new()
        } else {
            std::iter::once(wire::BaseImageChain::default())
                .chain(container.base_image_chains.iter().skip(1).map(chain_to_wire))
                .collect()
        };

        wire::ContainerImageMetadata {
            index: to_i32(position),
            os_info: container.os_info.clone(),
            layer_metadata: container
                .layer_metadata
                .iter()
                .map(|layer| wire::LayerMetadata {
                    index: to_i32(layer.index),
                    diff_id: digest_to_wire(layer.diff_id.as_ref()),
                    chain_id: digest_to_wire(layer.chain_id.as_ref()),
                    command: layer.command.clone(),
                    is_empty: layer.is_empty,
                    base_image_index: to_i32(layer.base_image_index),
                })
                .collect(),
            base_image_chains,
        }
    }

    /// 컨테이너를 디코딩합니다. `position`은 인벤토리 내 위치입니다.
    ///
    /// 패키지의 레이어 참조가 위치로 해석되므로 `index`도 위치를 따릅니다.
    /// 레이어의 소유 컨테이너 역참조는 호출자가 전체 목록을 만든 뒤 설정합니다.
    pub(crate) fn decode_container(
        &self,
        position: usize,
        wire: &wire::ContainerImageMetadata,
    ) -> ContainerImageMetadata {
        if usize::try_from(wire.index).ok() != Some(position) {
            warn!(
                wire_index = wire.index,
                position, "container index differs from its list position, using position"
            );
        }
        let base_image_chains = if wire.base_image_chains.is_empty() {
            Vec::new()
        } else {
            std::iter::once(BaseImageChain::default())
                .chain(wire.base_image_chains.iter().skip(1).map(chain_to_domain))
                .collect()
        };

        ContainerImageMetadata {
            index: position,
            os_info: wire.os_info.clone(),
            layer_metadata: wire
                .layer_metadata
                .iter()
                .map(|layer| LayerMetadata {
                    index: usize::try_from(layer.index).unwrap_or_default(),
                    diff_id: parse_digest("diff_id", &layer.diff_id),
                    chain_id: parse_digest("chain_id", &layer.chain_id),
                    command: layer.command.clone(),
                    is_empty: layer.is_empty,
                    base_image_index: usize::try_from(layer.base_image_index).unwrap_or_default(),
                    parent_container: None,
                })
                .collect(),
            base_image_chains,
        }
    }
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn chain_to_wire(chain: &BaseImageChain) -> wire::BaseImageChain {
    wire::BaseImageChain {
        base_images: chain
            .images
            .iter()
            .map(|image| wire::BaseImageDetails {
                repository: image.repository.clone(),
                registry: image.registry.clone(),
                plugin: image.plugin.clone(),
            })
            .collect(),
        chain_id: digest_to_wire(chain.chain_id.as_ref()),
    }
}

fn chain_to_domain(chain: &wire::BaseImageChain) -> BaseImageChain {
    BaseImageChain {
        chain_id: parse_digest("chain_id", &chain.chain_id),
        images: chain
            .base_images
            .iter()
            .map(|image| BaseImageDetails {
                repository: image.repository.clone(),
                registry: image.registry.clone(),
                plugin: image.plugin.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwire_core::model::Digest;

    fn digest(c: char) -> Option<Digest> {
        Digest::parse(&format!("sha256:{}", c.to_string().repeat(64))).ok()
    }

    fn container() -> ContainerImageMetadata {
        ContainerImageMetadata {
            index: 0,
            os_info: [("ID".to_owned(), "debian".to_owned())].into(),
            layer_metadata: vec![
                LayerMetadata {
                    index: 0,
                    diff_id: digest('a'),
                    chain_id: digest('a'),
                    command: "ADD rootfs.tar /".to_owned(),
                    base_image_index: 1,
                    ..Default::default()
                },
                LayerMetadata {
                    index: 1,
                    diff_id: digest('b'),
                    chain_id: digest('c'),
                    command: "RUN apt-get install -y curl".to_owned(),
                    base_image_index: 0,
                    ..Default::default()
                },
            ],
            base_image_chains: vec![
                BaseImageChain::default(),
                BaseImageChain {
                    chain_id: digest('a'),
                    images: vec![BaseImageDetails {
                        repository: "debian".to_owned(),
                        registry: "docker.io".to_owned(),
                        plugin: "baseimage".to_owned(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn placeholder_chain_is_synthesized_empty() {
        let codec = InventoryCodec::new().unwrap();
        let mut original = container();
        original.base_image_chains[0].images.push(BaseImageDetails {
            repository: "ignored".to_owned(),
            ..Default::default()
        });
        let wire = codec.encode_container(0, &original);
        assert_eq!(wire.base_image_chains.len(), 2);
        assert_eq!(wire.base_image_chains[0], wire::BaseImageChain::default());
    }

    #[test]
    fn container_roundtrip() {
        let codec = InventoryCodec::new().unwrap();
        let original = container();
        let wire = codec.encode_container(0, &original);
        assert_eq!(codec.decode_container(0, &wire), original);
    }

    #[test]
    fn no_chains_stay_empty() {
        let codec = InventoryCodec::new().unwrap();
        let mut original = container();
        original.base_image_chains.clear();
        let wire = codec.encode_container(0, &original);
        assert!(wire.base_image_chains.is_empty());
        assert!(codec.decode_container(0, &wire).base_image_chains.is_empty());
    }

    #[test]
    fn index_follows_list_position() {
        let codec = InventoryCodec::new().unwrap();
        let mut original = container();
        original.index = 7;
        let mut wire = codec.encode_container(2, &original);
        assert_eq!(wire.index, 2);

        wire.index = 9;
        assert_eq!(codec.decode_container(2, &wire).index, 2);
    }

    #[test]
    fn malformed_diff_id_decodes_to_none() {
        let codec = InventoryCodec::new().unwrap();
        let mut wire = codec.encode_container(0, &container());
        wire.layer_metadata[0].diff_id = "sha256:nothex".to_owned();
        let decoded = codec.decode_container(0, &wire);
        assert!(decoded.layer_metadata[0].diff_id.is_none());
        assert_eq!(decoded.layer_metadata[1].diff_id, digest('b'));
    }
}
