use std::sync::Arc;
use tracing::{debug, error};

use super::backend::{CohereBackend, GenerationBackend};
use super::credential::Credential;
use super::types::{GenerateRequest, GenerateResponse};
use crate::app::Config;
use crate::constants::{
    EMPTY_TRANSLATION_MESSAGE, MISSING_CREDENTIAL_MESSAGE, TRANSLATION_FAILURE_MESSAGE,
};
use crate::modes::TranslationMode;
use crate::utils::CrushorError;

/// Turns a message and a mode into one displayable sentence.
///
/// `translate` never fails: a missing credential, a transport error, or an
/// odd response all come back as fixed user-facing strings. The details go
/// to the log.
pub struct TranslationClient {
    backend: Arc<dyn GenerationBackend>,
    credential: Option<Credential>,
    model: String,
}

impl TranslationClient {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        credential: Option<Credential>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            credential,
            model: model.into(),
        }
    }

    /// Cohere-backed client using the endpoint and model from `config`
    pub fn from_config(config: &Config, credential: Option<Credential>) -> Self {
        let backend = CohereBackend::new(config.cohere.endpoint.clone());
        Self::new(Arc::new(backend), credential, config.cohere.model.clone())
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Translate already-trimmed `input_text` in `mode`
    pub async fn translate(&self, input_text: &str, mode: TranslationMode) -> String {
        let Some(credential) = &self.credential else {
            error!("{}", CrushorError::MissingCredential);
            return MISSING_CREDENTIAL_MESSAGE.to_string();
        };

        let request = GenerateRequest::for_translation(&self.model, input_text, mode);
        debug!(
            "Translating {} chars in {} mode (prompt {} chars)",
            input_text.chars().count(),
            mode,
            request.prompt.chars().count()
        );

        match self.backend.generate(credential, &request).await {
            Ok(response) => match first_candidate(response) {
                Some(text) => text,
                None => {
                    error!("Cohere API error: response contained no generations");
                    TRANSLATION_FAILURE_MESSAGE.to_string()
                }
            },
            Err(e) => {
                error!("Cohere API error: {}", e);
                if let Some(body) = e.body() {
                    error!("Response data: {}", body);
                }
                if let Some(status) = e.status() {
                    error!("Status: {}", status);
                }
                TRANSLATION_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Trimmed first candidate, or the fallback when it is blank
fn first_candidate(response: GenerateResponse) -> Option<String> {
    let text = response.first_text()?.trim();
    if text.is_empty() {
        Some(EMPTY_TRANSLATION_MESSAGE.to_string())
    } else {
        Some(text.to_string())
    }
}
