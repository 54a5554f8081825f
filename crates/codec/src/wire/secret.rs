//! 시크릿 메시지와 자격 증명 종류

use super::Timestamp;
use crate::registry::WireVariant;

/// 유출된 자격 증명
///
/// `locations`는 반복 필드이지만 정확히 하나의 항목만 유효합니다.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Secret {
    #[prost(message, optional, tag = "1")]
    pub secret: Option<SecretData>,
    #[prost(message, optional, tag = "2")]
    pub status: Option<SecretStatus>,
    #[prost(message, repeated, tag = "3")]
    pub locations: Vec<Location>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretData {
    #[prost(oneof = "SecretKind", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10")]
    pub secret: Option<SecretKind>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum SecretKind {
    #[prost(message, tag = "1")]
    PrivateKey(PrivateKey),
    #[prost(message, tag = "2")]
    Gcpsak(GcpServiceAccountKey),
    #[prost(message, tag = "3")]
    DockerHubPat(DockerHubPat),
    #[prost(message, tag = "4")]
    AnthropicWorkspaceApiKey(AnthropicWorkspaceApiKey),
    #[prost(message, tag = "5")]
    AnthropicModelApiKey(AnthropicModelApiKey),
    #[prost(message, tag = "6")]
    PerplexityApiKey(PerplexityApiKey),
    #[prost(message, tag = "7")]
    GrokXaiApiKey(GrokXaiApiKey),
    #[prost(message, tag = "8")]
    GrokXaiManagementApiKey(GrokXaiManagementApiKey),
    #[prost(message, tag = "9")]
    GithubClassicPersonalAccessToken(GithubClassicPersonalAccessToken),
    #[prost(message, tag = "10")]
    AwsAccessKeyCredentials(AwsAccessKeyCredentials),
}

impl WireVariant for SecretKind {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::PrivateKey(_) => "private_key",
            Self::Gcpsak(_) => "gcpsak",
            Self::DockerHubPat(_) => "docker_hub_pat",
            Self::AnthropicWorkspaceApiKey(_) => "anthropic_workspace_api_key",
            Self::AnthropicModelApiKey(_) => "anthropic_model_api_key",
            Self::PerplexityApiKey(_) => "perplexity_api_key",
            Self::GrokXaiApiKey(_) => "grok_xai_api_key",
            Self::GrokXaiManagementApiKey(_) => "grok_xai_management_api_key",
            Self::GithubClassicPersonalAccessToken(_) => "github_classic_personal_access_token",
            Self::AwsAccessKeyCredentials(_) => "aws_access_key_credentials",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrivateKey {
    #[prost(string, tag = "1")]
    pub block: String,
    #[prost(bytes = "vec", tag = "2")]
    pub der: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GcpServiceAccountKey {
    #[prost(string, tag = "1")]
    pub private_key_id: String,
    #[prost(string, tag = "2")]
    pub client_email: String,
    #[prost(bytes = "vec", tag = "3")]
    pub signature: Vec<u8>,
    #[prost(string, tag = "4")]
    pub r#type: String,
    #[prost(string, tag = "5")]
    pub project_id: String,
    #[prost(string, tag = "6")]
    pub client_id: String,
    #[prost(string, tag = "7")]
    pub auth_uri: String,
    #[prost(string, tag = "8")]
    pub token_uri: String,
    #[prost(string, tag = "9")]
    pub auth_provider_x509_cert_url: String,
    #[prost(string, tag = "10")]
    pub client_x509_cert_url: String,
    #[prost(string, tag = "11")]
    pub universe_domain: String,
    #[prost(string, tag = "12")]
    pub private_key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DockerHubPat {
    #[prost(string, tag = "1")]
    pub pat: String,
    #[prost(string, tag = "2")]
    pub username: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnthropicWorkspaceApiKey {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnthropicModelApiKey {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerplexityApiKey {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrokXaiApiKey {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrokXaiManagementApiKey {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GithubClassicPersonalAccessToken {
    #[prost(string, tag = "1")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AwsAccessKeyCredentials {
    #[prost(string, tag = "1")]
    pub access_id: String,
    #[prost(string, tag = "2")]
    pub secret: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretStatus {
    #[prost(enumeration = "SecretStatusEnum", tag = "1")]
    pub status: i32,
    #[prost(message, optional, tag = "2")]
    pub last_updated: Option<Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SecretStatusEnum {
    Unspecified = 0,
    Unsupported = 1,
    Failed = 2,
    Invalid = 3,
    Valid = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(oneof = "LocationKind", tags = "1, 2, 3, 4")]
    pub location: Option<LocationKind>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum LocationKind {
    #[prost(message, tag = "1")]
    Filepath(Filepath),
    #[prost(message, tag = "2")]
    EnvironmentVariable(EnvironmentVariable),
    #[prost(message, tag = "3")]
    ContainerCommand(ContainerCommand),
    #[prost(message, tag = "4")]
    FilepathWithLayerDetails(FilepathWithLayerDetails),
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filepath {
    #[prost(string, tag = "1")]
    pub path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnvironmentVariable {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerCommand {
    #[prost(string, tag = "1")]
    pub command: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilepathWithLayerDetails {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, optional, tag = "2")]
    pub layer_details: Option<LayerDetails>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LayerDetails {
    #[prost(uint32, tag = "1")]
    pub index: u32,
    #[prost(string, tag = "2")]
    pub diff_id: String,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(string, tag = "4")]
    pub command: String,
    #[prost(bool, tag = "5")]
    pub in_base_image: bool,
}
