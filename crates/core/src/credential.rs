//! 시크릿 자격 증명 종류
//!
//! 각 종류는 [`crate::model::SecretValue`]로 감싸 [`crate::model::Secret`]에 담습니다.
//! 패키지 메타데이터와는 겹치지 않는 별도의 타입 집합입니다.

/// PEM/DER 개인 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivateKey {
    /// PEM 블록 원문
    pub block: String,
    /// DER 인코딩 바이트
    pub der: Vec<u8>,
}

/// GCP 서비스 계정 키 JSON의 부가 필드
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcpServiceAccountKeyExtra {
    pub key_type: String,
    pub project_id: String,
    pub client_id: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub auth_provider_x509_cert_url: String,
    pub client_x509_cert_url: String,
    pub universe_domain: String,
    pub private_key: String,
}

/// GCP 서비스 계정 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcpServiceAccountKey {
    pub private_key_id: String,
    pub client_email: String,
    /// 키 소유 증명 서명
    pub signature: Vec<u8>,
    /// 원본 JSON 전체를 보존할 때만 채워짐
    pub extra: Option<GcpServiceAccountKeyExtra>,
}

/// Docker Hub 개인 액세스 토큰
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerHubPat {
    pub pat: String,
    pub username: String,
}

/// Anthropic 워크스페이스 관리 API 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnthropicWorkspaceApiKey {
    pub key: String,
}

/// Anthropic 모델 API 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnthropicModelApiKey {
    pub key: String,
}

/// Perplexity API 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerplexityApiKey {
    pub key: String,
}

/// Grok xAI API 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrokXaiApiKey {
    pub key: String,
}

/// Grok xAI 관리 키
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrokXaiManagementKey {
    pub key: String,
}

/// GitHub classic 개인 액세스 토큰 (`ghp_...`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubClassicPat {
    pub token: String,
}

/// AWS 액세스 키 쌍
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsAccessKey {
    pub access_key_id: String,
    pub secret_access_key: String,
}
