//! 컨테이너 런타임 메타데이터

use std::collections::BTreeMap;
use std::time::SystemTime;

/// containerd 컨테이너 (파일시스템 스냅샷 기반)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerdContainerMetadata {
    pub namespace: String,
    pub image_name: String,
    pub image_digest: String,
    pub runtime: String,
    pub id: String,
    pub pid: i32,
    pub snapshotter: String,
    pub snapshot_key: String,
    pub lower_dir: String,
    pub upper_dir: String,
    pub work_dir: String,
}

/// containerd 런타임 API로 조회한 실행 중 컨테이너
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerdRuntimeMetadata {
    pub namespace: String,
    pub image_name: String,
    pub image_digest: String,
    pub runtime: String,
    pub id: String,
    pub pid: i32,
    pub rootfs_path: String,
}

/// Podman 포트의 프로토콜 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodmanProtocol {
    pub names: Vec<String>,
}

/// Podman 컨테이너
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodmanMetadata {
    /// 노출 포트 -> 프로토콜
    pub exposed_ports: BTreeMap<u16, PodmanProtocol>,
    pub pid: i32,
    pub namespace_name: String,
    pub started_time: Option<SystemTime>,
    pub finished_time: Option<SystemTime>,
    pub status: String,
    pub exit_code: i32,
    pub exited: bool,
}

/// Docker 포트 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerPort {
    pub ip: String,
    pub private_port: u16,
    pub public_port: u16,
    /// `tcp`, `udp`
    pub port_type: String,
}

/// Docker 컨테이너
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerContainerMetadata {
    pub image_name: String,
    pub image_digest: String,
    pub id: String,
    pub ports: Vec<DockerPort>,
}
