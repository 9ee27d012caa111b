use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::credential::Credential;
use super::types::{GenerateRequest, GenerateResponse};
use crate::utils::CrushorError;

/// Transport for one generation round trip
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send a single generate request and decode the candidates
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, CrushorError>;
}

/// Cohere `/v1/generate` over HTTPS
pub struct CohereBackend {
    client: Client,
    endpoint: String,
}

impl CohereBackend {
    /// Uses reqwest's default transport settings; no timeout override
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Reuse an existing reqwest client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GenerationBackend for CohereBackend {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, CrushorError> {
        debug!(
            "POST {} (model={}, temperature={})",
            self.endpoint, request.model, request.temperature
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CrushorError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| CrushorError::MalformedResponse(e.to_string()))
    }
}
