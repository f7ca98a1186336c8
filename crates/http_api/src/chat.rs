use app_api::{ChatRequest, ChatResponse, InferenceRequest, build_prompt, reply_from_inference};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{}", app_api::MISSING_KEY_MESSAGE)]
    MissingKey,
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

/// Stateless pass-through to a hosted text-generation endpoint.
#[derive(Clone)]
pub struct ChatRelay {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ChatRelay {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Reads the bearer key from `HF_API_KEY`.
    pub fn from_env(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, std::env::var("HF_API_KEY").ok())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingKey)?;
        let prompt = build_prompt(&req.messages);
        debug!(
            model = req.model.as_deref().unwrap_or("default"),
            messages = req.messages.len(),
            "relaying chat prompt"
        );
        let body: Value = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await?
            .json()
            .await?;
        Ok(reply_from_inference(&body))
    }
}
