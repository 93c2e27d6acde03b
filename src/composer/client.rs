//! Answer endpoint client
//!
//! Thin HTTP client the composer uses to submit queries to the advisory
//! answer endpoint.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::query::{Answer, QueryRequest};

/// Client for the advisory answer endpoint
#[derive(Debug, Clone)]
pub struct AnswerClient {
    client: Client,
    endpoint: String,
}

impl AnswerClient {
    /// Create a client against a service base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("krishiproxy/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/answer", base_url.trim_end_matches('/')),
        })
    }

    /// Submit one query and return the parsed answer
    pub async fn ask(&self, query: &QueryRequest) -> Result<Answer> {
        debug!("Submitting advisory query to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(query)
            .send()
            .await
            .context("Failed to reach the answer endpoint")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Answer endpoint returned {}", status);
        }

        let answer: Answer = response
            .json()
            .await
            .context("Failed to parse answer body")?;

        Ok(answer)
    }
}
