//! Advisory service
//!
//! Orchestrates answering one query: prompt validation, per-request
//! credential lookup, then either the live upstream exchange or the
//! localized placeholder answer.

use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::locale::{advisory_pack, Language};
use crate::models::chat::ChatRequest;
use crate::models::query::{Answer, QueryRequest};
use crate::services::upstream::CompletionApi;
use crate::utils::error::{AppError, AppResult};

/// Advisory orchestration service
pub struct AdvisoryService {
    settings: Settings,
    api: Arc<dyn CompletionApi>,
}

impl AdvisoryService {
    /// Create a new service instance
    pub fn new(settings: Settings, api: Arc<dyn CompletionApi>) -> Self {
        Self { settings, api }
    }

    /// Answer one advisory query.
    ///
    /// The credential is looked up on every call, so presence can change
    /// between requests without a restart. Without a credential no upstream
    /// call is made at all.
    pub async fn answer(&self, query: &QueryRequest) -> AppResult<Answer> {
        let prompt = query.prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::MissingPrompt);
        }

        let language = Language::from_code(&query.language);

        match self.settings.upstream_credential() {
            Some(api_key) => {
                let request = ChatRequest::advisory(language, prompt);
                let completion = self.api.complete(&api_key, &request).await?;
                debug!("Answer produced by upstream model");

                Ok(Answer::live(completion.first_content()))
            }
            None => {
                debug!(
                    "No upstream credential configured, answering with '{}' placeholder",
                    language.code()
                );

                Ok(Answer::mocked(advisory_pack(language).placeholder_answer))
            }
        }
    }
}
