//! 컨테이너 이미지와 레이어 메타데이터

use std::collections::BTreeMap;

use crate::model::digest::Digest;

/// 베이스 이미지 후보 하나
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseImageDetails {
    pub repository: String,
    pub registry: String,
    /// 베이스 이미지를 식별한 플러그인
    pub plugin: String,
}

/// 같은 체인 ID를 공유하는 베이스 이미지 후보 묶음
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseImageChain {
    pub chain_id: Option<Digest>,
    pub images: Vec<BaseImageDetails>,
}

/// 이미지 레이어 하나
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerMetadata {
    /// 이미지 내 레이어 순서
    pub index: usize,
    pub diff_id: Option<Digest>,
    pub chain_id: Option<Digest>,
    /// 레이어를 만든 빌드 명령
    pub command: String,
    /// 파일 변경이 없는 레이어인지 여부
    pub is_empty: bool,
    /// `ContainerImageMetadata::base_image_chains` 인덱스 (0 = 베이스 이미지 아님)
    pub base_image_index: usize,
    /// 이 레이어를 소유한 컨테이너의 인벤토리 인덱스
    ///
    /// 와이어에 직렬화되지 않으며 디코딩 시 위치로부터 복원됩니다.
    pub parent_container: Option<usize>,
}

/// 컨테이너 이미지 메타데이터
///
/// 레이어 목록을 소유하는 아레나입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerImageMetadata {
    /// 인벤토리 내 인덱스. [`Inventory::add_container`](crate::model::Inventory::add_container)가
    /// 목록 위치로 설정하며, 인코딩과 디코딩도 이 값 대신 목록 위치를 씁니다.
    pub index: usize,
    /// OS 정보 (`/etc/os-release` 키-값)
    pub os_info: BTreeMap<String, String>,
    pub layer_metadata: Vec<LayerMetadata>,
    /// 베이스 이미지 체인. 첫 항목은 항상 빈 자리표시자입니다.
    pub base_image_chains: Vec<BaseImageChain>,
}

impl ContainerImageMetadata {
    /// 레이어 인덱스로 레이어를 조회합니다.
    pub fn layer(&self, index: usize) -> Option<&LayerMetadata> {
        self.layer_metadata.get(index)
    }

    /// 레이어가 참조하는 베이스 이미지 체인 (자리표시자는 제외)
    pub fn base_image_chain(&self, layer: &LayerMetadata) -> Option<&BaseImageChain> {
        if layer.base_image_index == 0 {
            return None;
        }
        self.base_image_chains.get(layer.base_image_index)
    }
}
