//! 시크릿 자격 증명 변환기

use scanwire_core::credential::{
    AnthropicModelApiKey, AnthropicWorkspaceApiKey, AwsAccessKey, DockerHubPat,
    GcpServiceAccountKey, GcpServiceAccountKeyExtra, GithubClassicPat, GrokXaiApiKey,
    GrokXaiManagementKey, PerplexityApiKey, PrivateKey,
};

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::wire::{self, SecretKind as K};

/// 모든 내장 자격 증명 종류를 등록합니다.
pub fn register(registry: &mut Registry<K>) -> Result<(), RegistryError> {
    registry.register(
        "private_key",
        |w| match w {
            K::PrivateKey(k) => Some(PrivateKey {
                block: k.block.clone(),
                der: k.der.clone(),
            }),
            _ => None,
        },
        |d: &PrivateKey| {
            K::PrivateKey(wire::PrivateKey {
                block: d.block.clone(),
                der: d.der.clone(),
            })
        },
    )?;
    registry.register(
        "gcpsak",
        |w| match w {
            K::Gcpsak(k) => Some(gcpsak_to_domain(k)),
            _ => None,
        },
        |d: &GcpServiceAccountKey| K::Gcpsak(gcpsak_to_wire(d)),
    )?;
    registry.register(
        "docker_hub_pat",
        |w| match w {
            K::DockerHubPat(k) => Some(DockerHubPat {
                pat: k.pat.clone(),
                username: k.username.clone(),
            }),
            _ => None,
        },
        |d: &DockerHubPat| {
            K::DockerHubPat(wire::DockerHubPat {
                pat: d.pat.clone(),
                username: d.username.clone(),
            })
        },
    )?;
    registry.register(
        "anthropic_workspace_api_key",
        |w| match w {
            K::AnthropicWorkspaceApiKey(k) => Some(AnthropicWorkspaceApiKey { key: k.key.clone() }),
            _ => None,
        },
        |d: &AnthropicWorkspaceApiKey| {
            K::AnthropicWorkspaceApiKey(wire::AnthropicWorkspaceApiKey { key: d.key.clone() })
        },
    )?;
    registry.register(
        "anthropic_model_api_key",
        |w| match w {
            K::AnthropicModelApiKey(k) => Some(AnthropicModelApiKey { key: k.key.clone() }),
            _ => None,
        },
        |d: &AnthropicModelApiKey| {
            K::AnthropicModelApiKey(wire::AnthropicModelApiKey { key: d.key.clone() })
        },
    )?;
    registry.register(
        "perplexity_api_key",
        |w| match w {
            K::PerplexityApiKey(k) => Some(PerplexityApiKey { key: k.key.clone() }),
            _ => None,
        },
        |d: &PerplexityApiKey| K::PerplexityApiKey(wire::PerplexityApiKey { key: d.key.clone() }),
    )?;
    registry.register(
        "grok_xai_api_key",
        |w| match w {
            K::GrokXaiApiKey(k) => Some(GrokXaiApiKey { key: k.key.clone() }),
            _ => None,
        },
        |d: &GrokXaiApiKey| K::GrokXaiApiKey(wire::GrokXaiApiKey { key: d.key.clone() }),
    )?;
    registry.register(
        "grok_xai_management_api_key",
        |w| match w {
            K::GrokXaiManagementApiKey(k) => Some(GrokXaiManagementKey { key: k.key.clone() }),
            _ => None,
        },
        |d: &GrokXaiManagementKey| {
            K::GrokXaiManagementApiKey(wire::GrokXaiManagementApiKey { key: d.key.clone() })
        },
    )?;
    registry.register(
        "github_classic_personal_access_token",
        |w| match w {
            K::GithubClassicPersonalAccessToken(k) => Some(GithubClassicPat {
                token: k.token.clone(),
            }),
            _ => None,
        },
        |d: &GithubClassicPat| {
            K::GithubClassicPersonalAccessToken(wire::GithubClassicPersonalAccessToken {
                token: d.token.clone(),
            })
        },
    )?;
    registry.register(
        "aws_access_key_credentials",
        |w| match w {
            K::AwsAccessKeyCredentials(k) => Some(AwsAccessKey {
                access_key_id: k.access_id.clone(),
                secret_access_key: k.secret.clone(),
            }),
            _ => None,
        },
        |d: &AwsAccessKey| {
            K::AwsAccessKeyCredentials(wire::AwsAccessKeyCredentials {
                access_id: d.access_key_id.clone(),
                secret: d.secret_access_key.clone(),
            })
        },
    )?;
    Ok(())
}

// 와이어에서는 부가 필드가 평탄화되어 있음
fn gcpsak_to_wire(d: &GcpServiceAccountKey) -> wire::GcpServiceAccountKey {
    let extra = d.extra.clone().unwrap_or_default();
    wire::GcpServiceAccountKey {
        private_key_id: d.private_key_id.clone(),
        client_email: d.client_email.clone(),
        signature: d.signature.clone(),
        r#type: extra.key_type,
        project_id: extra.project_id,
        client_id: extra.client_id,
        auth_uri: extra.auth_uri,
        token_uri: extra.token_uri,
        auth_provider_x509_cert_url: extra.auth_provider_x509_cert_url,
        client_x509_cert_url: extra.client_x509_cert_url,
        universe_domain: extra.universe_domain,
        private_key: extra.private_key,
    }
}

fn gcpsak_to_domain(w: &wire::GcpServiceAccountKey) -> GcpServiceAccountKey {
    let extra = GcpServiceAccountKeyExtra {
        key_type: w.r#type.clone(),
        project_id: w.project_id.clone(),
        client_id: w.client_id.clone(),
        auth_uri: w.auth_uri.clone(),
        token_uri: w.token_uri.clone(),
        auth_provider_x509_cert_url: w.auth_provider_x509_cert_url.clone(),
        client_x509_cert_url: w.client_x509_cert_url.clone(),
        universe_domain: w.universe_domain.clone(),
        private_key: w.private_key.clone(),
    };
    GcpServiceAccountKey {
        private_key_id: w.private_key_id.clone(),
        client_email: w.client_email.clone(),
        signature: w.signature.clone(),
        extra: (extra != GcpServiceAccountKeyExtra::default()).then_some(extra),
    }
}
