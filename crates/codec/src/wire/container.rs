//! 컨테이너 이미지 메타데이터 메시지
//!
//! 레이어 → 컨테이너 역참조는 직렬화하지 않습니다.

use std::collections::BTreeMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerImageMetadata {
    #[prost(int32, tag = "1")]
    pub index: i32,
    #[prost(btree_map = "string, string", tag = "2")]
    pub os_info: BTreeMap<String, String>,
    #[prost(message, repeated, tag = "3")]
    pub layer_metadata: Vec<LayerMetadata>,
    #[prost(message, repeated, tag = "4")]
    pub base_image_chains: Vec<BaseImageChain>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LayerMetadata {
    #[prost(int32, tag = "1")]
    pub index: i32,
    #[prost(string, tag = "2")]
    pub diff_id: String,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(string, tag = "4")]
    pub command: String,
    #[prost(bool, tag = "5")]
    pub is_empty: bool,
    #[prost(int32, tag = "6")]
    pub base_image_index: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BaseImageChain {
    #[prost(message, repeated, tag = "1")]
    pub base_images: Vec<BaseImageDetails>,
    #[prost(string, tag = "2")]
    pub chain_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BaseImageDetails {
    #[prost(string, tag = "1")]
    pub repository: String,
    #[prost(string, tag = "2")]
    pub registry: String,
    #[prost(string, tag = "3")]
    pub plugin: String,
}
