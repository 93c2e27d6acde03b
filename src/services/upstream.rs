//! Upstream chat completion client
//!
//! Talks to the OpenAI-compatible chat completion endpoint. The transport
//! sits behind a trait so the advisory service can be exercised without a
//! network.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::models::chat::{ChatCompletion, ChatRequest};
use crate::utils::error::{AppError, AppResult};

/// Chat completion transport
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Send one chat completion request with the given bearer credential
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> AppResult<ChatCompletion>;
}

/// OpenAI-compatible API client
#[derive(Debug, Clone)]
pub struct OpenAiApi {
    client: Client,
    base_url: String,
}

impl OpenAiApi {
    /// Create a new client instance.
    ///
    /// No explicit timeout is configured: requests rely on transport defaults
    /// and always run to completion.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("krishiproxy/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Build the request URL
    fn build_url(&self) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/chat/completions", base_url)
    }
}

#[async_trait]
impl CompletionApi for OpenAiApi {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> AppResult<ChatCompletion> {
        debug!("Sending chat completion request for model {}", request.model);

        let url = self.build_url();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Chat completion request failed: {} - {}", status, error_text);
            return Err(AppError::upstream(error_text));
        }

        let completion: ChatCompletion = response.json().await?;
        debug!("Chat completion request succeeded");

        Ok(completion)
    }
}
