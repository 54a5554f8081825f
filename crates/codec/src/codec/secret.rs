//! 시크릿 인코딩/디코딩

use scanwire_core::model::{
    LayerDetails, Secret, SecretLocation, SecretValue, ValidationResult, ValidationStatus,
};

use super::{InventoryCodec, digest_to_wire, parse_digest};
use crate::error::CodecError;
use crate::wire::{self, LocationKind, Timestamp};

impl InventoryCodec {
    /// 시크릿을 인코딩합니다. 자격 증명 종류가 등록되지 않았으면 에러입니다.
    pub fn encode_secret(&self, secret: &Secret) -> Result<wire::Secret, CodecError> {
        let kind = self.secrets.encode(secret.value.as_payload())?;
        Ok(wire::Secret {
            secret: Some(wire::SecretData { secret: Some(kind) }),
            status: self.encode_validation(&secret.validation),
            locations: vec![location_to_wire(&secret.location)],
        })
    }

    /// 시크릿 하나를 디코딩합니다.
    ///
    /// 위치가 정확히 하나가 아니거나 자격 증명 종류를 알 수 없으면 에러입니다.
    pub fn decode_secret(&self, wire: &wire::Secret) -> Result<Secret, CodecError> {
        let location = match wire.locations.as_slice() {
            [location] => location_to_domain(location)
                .ok_or(CodecError::SecretLocationCount { found: 0 })?,
            other => return Err(CodecError::SecretLocationCount { found: other.len() }),
        };
        let value = wire
            .secret
            .as_ref()
            .and_then(|data| data.secret.as_ref())
            .and_then(|kind| self.secrets.decode(kind))
            .map(SecretValue::from_boxed)
            .ok_or(CodecError::SecretKindMissing)?;

        Ok(Secret {
            value,
            validation: self.decode_validation(wire.status.as_ref()),
            location,
        })
    }

    // 검증 상태가 비어 있으면 상태 메시지를 생략
    fn encode_validation(&self, validation: &ValidationResult) -> Option<wire::SecretStatus> {
        if validation.status == ValidationStatus::Unspecified && validation.at.is_none() {
            return None;
        }
        Some(wire::SecretStatus {
            status: self.tables.validation.to_wire(validation.status) as i32,
            last_updated: validation.at.map(Timestamp::from),
        })
    }

    fn decode_validation(&self, status: Option<&wire::SecretStatus>) -> ValidationResult {
        status
            .map(|s| ValidationResult {
                status: self.tables.validation.to_domain(s.status()),
                at: s.last_updated.map(|t| t.to_system_time()),
            })
            .unwrap_or_default()
    }
}

fn location_to_wire(location: &SecretLocation) -> wire::Location {
    let kind = match location {
        SecretLocation::Filepath(path) => LocationKind::Filepath(wire::Filepath { path: path.clone() }),
        SecretLocation::EnvironmentVariable(name) => {
            LocationKind::EnvironmentVariable(wire::EnvironmentVariable { name: name.clone() })
        }
        SecretLocation::ContainerCommand(command) => {
            LocationKind::ContainerCommand(wire::ContainerCommand {
                command: command.clone(),
            })
        }
        SecretLocation::FilepathWithLayerDetails { path, layer } => {
            LocationKind::FilepathWithLayerDetails(wire::FilepathWithLayerDetails {
                path: path.clone(),
                layer_details: Some(wire::LayerDetails {
                    index: layer.index,
                    diff_id: digest_to_wire(layer.diff_id.as_ref()),
                    chain_id: digest_to_wire(layer.chain_id.as_ref()),
                    command: layer.command.clone(),
                    in_base_image: layer.in_base_image,
                }),
            })
        }
    };
    wire::Location {
        location: Some(kind),
    }
}

fn location_to_domain(location: &wire::Location) -> Option<SecretLocation> {
    let location = match location.location.as_ref()? {
        LocationKind::Filepath(f) => SecretLocation::Filepath(f.path.clone()),
        LocationKind::EnvironmentVariable(e) => SecretLocation::EnvironmentVariable(e.name.clone()),
        LocationKind::ContainerCommand(c) => SecretLocation::ContainerCommand(c.command.clone()),
        LocationKind::FilepathWithLayerDetails(f) => SecretLocation::FilepathWithLayerDetails {
            path: f.path.clone(),
            layer: f
                .layer_details
                .as_ref()
                .map(|l| LayerDetails {
                    index: l.index,
                    diff_id: parse_digest("diff_id", &l.diff_id),
                    chain_id: parse_digest("chain_id", &l.chain_id),
                    command: l.command.clone(),
                    in_base_image: l.in_base_image,
                })
                .unwrap_or_default(),
        },
    };
    Some(location)
}
