//! 컨테이너 런타임 메타데이터 변환기

use std::collections::BTreeMap;

use scanwire_core::metadata::{
    ContainerdContainerMetadata, ContainerdRuntimeMetadata, DockerContainerMetadata, DockerPort,
    PodmanMetadata, PodmanProtocol,
};
use tracing::warn;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire::{self, PackageMetadata as M, Timestamp};

/// 이 분류의 모든 메타데이터 형태를 등록합니다.
pub fn register(registry: &mut Registry<M>) -> Result<(), RegistryError> {
    registry.register(
        "containerd_container_metadata",
        |w| match w {
            M::ContainerdContainerMetadata(m) => Some(containerd_container_to_domain(m)),
            _ => None,
        },
        |d: &ContainerdContainerMetadata| M::ContainerdContainerMetadata(containerd_container_to_wire(d)),
    )?;
    registry.register(
        "containerd_runtime_container_metadata",
        |w| match w {
            M::ContainerdRuntimeContainerMetadata(m) => Some(containerd_runtime_to_domain(m)),
            _ => None,
        },
        |d: &ContainerdRuntimeMetadata| M::ContainerdRuntimeContainerMetadata(containerd_runtime_to_wire(d)),
    )?;
    registry.register(
        "podman_metadata",
        |w| match w {
            M::PodmanMetadata(m) => Some(podman_to_domain(m)),
            _ => None,
        },
        |d: &PodmanMetadata| M::PodmanMetadata(podman_to_wire(d)),
    )?;
    registry.register(
        "docker_containers_metadata",
        |w| match w {
            M::DockerContainersMetadata(m) => Some(docker_to_domain(m)),
            _ => None,
        },
        |d: &DockerContainerMetadata| M::DockerContainersMetadata(docker_to_wire(d)),
    )?;
    Ok(())
}

fn containerd_container_to_wire(d: &ContainerdContainerMetadata) -> wire::ContainerdContainerMetadata {
    wire::ContainerdContainerMetadata {
        namespace_name: d.namespace.clone(),
        image_name: d.image_name.clone(),
        image_digest: d.image_digest.clone(),
        runtime: d.runtime.clone(),
        id: d.id.clone(),
        pid: d.pid,
        snapshotter: d.snapshotter.clone(),
        snapshot_key: d.snapshot_key.clone(),
        lower_dir: d.lower_dir.clone(),
        upper_dir: d.upper_dir.clone(),
        work_dir: d.work_dir.clone(),
    }
}

fn containerd_container_to_domain(w: &wire::ContainerdContainerMetadata) -> ContainerdContainerMetadata {
    ContainerdContainerMetadata {
        namespace: w.namespace_name.clone(),
        image_name: w.image_name.clone(),
        image_digest: w.image_digest.clone(),
        runtime: w.runtime.clone(),
        id: w.id.clone(),
        pid: w.pid,
        snapshotter: w.snapshotter.clone(),
        snapshot_key: w.snapshot_key.clone(),
        lower_dir: w.lower_dir.clone(),
        upper_dir: w.upper_dir.clone(),
        work_dir: w.work_dir.clone(),
    }
}

fn containerd_runtime_to_wire(d: &ContainerdRuntimeMetadata) -> wire::ContainerdRuntimeContainerMetadata {
    wire::ContainerdRuntimeContainerMetadata {
        namespace_name: d.namespace.clone(),
        image_name: d.image_name.clone(),
        image_digest: d.image_digest.clone(),
        runtime: d.runtime.clone(),
        id: d.id.clone(),
        pid: d.pid,
        rootfs_path: d.rootfs_path.clone(),
    }
}

fn containerd_runtime_to_domain(w: &wire::ContainerdRuntimeContainerMetadata) -> ContainerdRuntimeMetadata {
    ContainerdRuntimeMetadata {
        namespace: w.namespace_name.clone(),
        image_name: w.image_name.clone(),
        image_digest: w.image_digest.clone(),
        runtime: w.runtime.clone(),
        id: w.id.clone(),
        pid: w.pid,
        rootfs_path: w.rootfs_path.clone(),
    }
}

fn podman_to_wire(d: &PodmanMetadata) -> wire::PodmanMetadata {
    wire::PodmanMetadata {
        exposed_ports: exposed_ports_to_wire(&d.exposed_ports),
        pid: d.pid,
        namespace_name: d.namespace_name.clone(),
        started_time: d.started_time.map(Timestamp::from),
        finished_time: d.finished_time.map(Timestamp::from),
        status: d.status.clone(),
        exit_code: d.exit_code,
        exited: d.exited,
    }
}

fn podman_to_domain(w: &wire::PodmanMetadata) -> PodmanMetadata {
    PodmanMetadata {
        exposed_ports: exposed_ports_to_domain(&w.exposed_ports),
        pid: w.pid,
        namespace_name: w.namespace_name.clone(),
        started_time: w.started_time.as_ref().map(Timestamp::to_system_time),
        finished_time: w.finished_time.as_ref().map(Timestamp::to_system_time),
        status: w.status.clone(),
        exit_code: w.exit_code,
        exited: w.exited,
    }
}

fn docker_to_wire(d: &DockerContainerMetadata) -> wire::DockerContainersMetadata {
    wire::DockerContainersMetadata {
        image_name: d.image_name.clone(),
        image_digest: d.image_digest.clone(),
        id: d.id.clone(),
        ports: d.ports.iter().map(docker_port_to_wire).collect(),
    }
}

fn docker_to_domain(w: &wire::DockerContainersMetadata) -> DockerContainerMetadata {
    DockerContainerMetadata {
        image_name: w.image_name.clone(),
        image_digest: w.image_digest.clone(),
        id: w.id.clone(),
        ports: w.ports.iter().map(docker_port_to_domain).collect(),
    }
}

fn exposed_ports_to_wire(ports: &BTreeMap<u16, PodmanProtocol>) -> BTreeMap<u32, wire::Protocol> {
    ports
        .iter()
        .map(|(port, protocol)| {
            (
                u32::from(*port),
                wire::Protocol {
                    names: protocol.names.clone(),
                },
            )
        })
        .collect()
}

fn exposed_ports_to_domain(ports: &BTreeMap<u32, wire::Protocol>) -> BTreeMap<u16, PodmanProtocol> {
    ports
        .iter()
        .filter_map(|(port, protocol)| match u16::try_from(*port) {
            Ok(port) => Some((
                port,
                PodmanProtocol {
                    names: protocol.names.clone(),
                },
            )),
            Err(_) => {
                warn!(port, "podman exposed port out of range, skipping");
                None
            }
        })
        .collect()
}

fn docker_port_to_wire(port: &DockerPort) -> wire::DockerPort {
    wire::DockerPort {
        ip: port.ip.clone(),
        private_port: u32::from(port.private_port),
        public_port: u32::from(port.public_port),
        r#type: port.port_type.clone(),
    }
}

fn docker_port_to_domain(port: &wire::DockerPort) -> DockerPort {
    DockerPort {
        ip: port.ip.clone(),
        private_port: u16::try_from(port.private_port).unwrap_or_default(),
        public_port: u16::try_from(port.public_port).unwrap_or_default(),
        port_type: port.r#type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn podman_roundtrip_with_ports_and_times() {
        let domain = PodmanMetadata {
            exposed_ports: BTreeMap::from([(
                8080,
                PodmanProtocol {
                    names: vec!["tcp".to_owned()],
                },
            )]),
            pid: 4242,
            namespace_name: "default".to_owned(),
            started_time: Some(UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
            finished_time: None,
            status: "running".to_owned(),
            exit_code: 0,
            exited: false,
        };
        let wire = podman_to_wire(&domain);
        assert_eq!(wire.exposed_ports.len(), 1);
        assert_eq!(podman_to_domain(&wire), domain);
    }

    #[test]
    fn podman_out_of_range_port_is_skipped() {
        let wire = wire::PodmanMetadata {
            exposed_ports: BTreeMap::from([(70_000, wire::Protocol::default())]),
            ..Default::default()
        };
        assert!(podman_to_domain(&wire).exposed_ports.is_empty());
    }

    #[test]
    fn docker_ports_roundtrip() {
        let domain = DockerContainerMetadata {
            image_name: "nginx:1.25".to_owned(),
            image_digest: "sha256:abc".to_owned(),
            id: "c0ffee".to_owned(),
            ports: vec![DockerPort {
                ip: "0.0.0.0".to_owned(),
                private_port: 80,
                public_port: 8080,
                port_type: "tcp".to_owned(),
            }],
        };
        assert_eq!(docker_to_domain(&docker_to_wire(&domain)), domain);
    }
}
