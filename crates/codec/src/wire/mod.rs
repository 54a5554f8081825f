//! 와이어 메시지 정의
//!
//! protobuf 스키마를 `prost` derive로 직접 선언합니다.
//! 같은 스키마가 `proto/scanwire.proto`에도 있으며, 텍스트 형식 입출력은
//! 그 디스크립터를 사용합니다. 두 정의의 태그와 타입은 항상 같아야 합니다.
//!
//! enum 필드는 protobuf 관례대로 `i32`로 보관하며,
//! `prost`가 생성하는 getter(`status()` 등)로 enum 값을 얻습니다.
//! 알 수 없는 값은 getter에서 기본값(Unspecified)이 됩니다.

mod container;
mod finding;
mod metadata;
mod package;
mod result;
mod secret;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub use container::{BaseImageChain, BaseImageDetails, ContainerImageMetadata, LayerMetadata};
pub use finding::{
    Advisory, AdvisoryId, AdvisoryTypeEnum, CvssScore, GenericFinding, PackageVuln, Severity,
    SeverityEnum, TargetDetails, VulnSeverity, Vulnerability,
};
pub use metadata::*;
pub use package::{
    ContainerImageMetadataIndexes, FindingExploitabilitySignal, Package, PackageAnnotation,
    PackageExploitabilitySignal, PackageMetadata, Purl, Qualifier, SourceCodeIdentifier,
    VexJustification, VulnFilter, VulnIdentifiers,
};
pub use result::{Inventory, PluginStatus, ScanResult, ScanStatus, ScanStatusEnum};
pub use secret::{
    AnthropicModelApiKey, AnthropicWorkspaceApiKey, AwsAccessKeyCredentials, ContainerCommand,
    DockerHubPat, EnvironmentVariable, Filepath, FilepathWithLayerDetails, GcpServiceAccountKey,
    GithubClassicPersonalAccessToken, GrokXaiApiKey, GrokXaiManagementApiKey, LayerDetails,
    Location, LocationKind, PerplexityApiKey, PrivateKey, Secret, SecretData, SecretKind,
    SecretStatus, SecretStatusEnum,
};

/// `proto/scanwire.proto`의 패키지 이름
pub const PACKAGE: &str = "scanwire";

/// 파일로 기록/복원할 수 있는 최상위 와이어 메시지
///
/// [`prost::Name`]의 전체 이름으로 텍스트 형식 디스크립터를 찾습니다.
pub trait WireMessage: prost::Message + prost::Name + Default {}

impl<T> WireMessage for T where T: prost::Message + prost::Name + Default {}

macro_rules! impl_name {
    ($($message:ident),* $(,)?) => {
        $(
            impl prost::Name for $message {
                const NAME: &'static str = stringify!($message);
                const PACKAGE: &'static str = PACKAGE;
            }
        )*
    };
}

impl_name!(
    ScanResult,
    Inventory,
    Package,
    PackageVuln,
    GenericFinding,
    Secret,
    ContainerImageMetadata,
);

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// 시각 (`google.protobuf.Timestamp`와 같은 모양)
///
/// `nanos`는 항상 `0..1_000_000_000` 범위이며, epoch 이전 시각은 음수 `seconds`로 표현합니다.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    /// `SystemTime`으로 변환합니다. 표현할 수 없는 값은 epoch로 대체됩니다.
    pub fn to_system_time(&self) -> SystemTime {
        let nanos = self.nanos.clamp(0, NANOS_PER_SECOND - 1) as u64;
        let time = if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::from_secs(self.seconds as u64))
        } else {
            UNIX_EPOCH.checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))
        };
        time.and_then(|t| t.checked_add(Duration::from_nanos(nanos)))
            .unwrap_or(UNIX_EPOCH)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self {
                seconds: after.as_secs() as i64,
                nanos: after.subsec_nanos() as i32,
            },
            Err(e) => {
                let before = e.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut nanos = before.subsec_nanos() as i32;
                if nanos > 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Self { seconds, nanos }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_roundtrip_after_epoch() {
        let time = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
        let ts = Timestamp::from(time);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
        assert_eq!(ts.to_system_time(), time);
    }

    #[test]
    fn timestamp_roundtrip_before_epoch() {
        let time = UNIX_EPOCH - Duration::new(10, 250_000_000);
        let ts = Timestamp::from(time);
        assert_eq!(ts.seconds, -11);
        assert_eq!(ts.nanos, 750_000_000);
        assert_eq!(ts.to_system_time(), time);
    }

    #[test]
    fn timestamp_clamps_out_of_range_nanos() {
        let ts = Timestamp {
            seconds: 0,
            nanos: -5,
        };
        assert_eq!(ts.to_system_time(), UNIX_EPOCH);
    }
}
