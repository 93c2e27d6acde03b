//! Chat completion wire models
//!
//! Request and response structures for the OpenAI-compatible chat completion
//! endpoint the advisory prompts are forwarded to. Responses deserialize
//! leniently so a thin or unusual upstream payload never fails the exchange.

use serde::{Deserialize, Serialize};

use crate::locale::{advisory_pack, Language};

/// Chat model used for every advisory exchange
pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature used for every advisory exchange
pub const CHAT_TEMPERATURE: f32 = 0.3;

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Message list
    pub messages: Vec<ChatMessage>,
    /// Temperature parameter
    pub temperature: f32,
}

impl ChatRequest {
    /// Build the two-message advisory exchange: the language's system
    /// instruction followed by the farmer's prompt
    pub fn advisory(language: Language, prompt: &str) -> Self {
        let pack = advisory_pack(language);
        ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(pack.system_instruction),
                ChatMessage::user(prompt),
            ],
            temperature: CHAT_TEMPERATURE,
        }
    }
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Role (system/user)
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Chat completion response
///
/// Every field is optional or defaulted: a response with no choices, no
/// message, or no content still deserializes and yields an empty answer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatCompletion {
    /// Completion ID (optional, diagnostics only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that produced the completion (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Candidate answers
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token usage (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
}

impl ChatCompletion {
    /// Content of the first choice, or the empty string when the upstream
    /// returned none
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}

/// Single completion choice
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatChoice {
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// Generated message
    #[serde(default)]
    pub message: ChoiceMessage,
    /// Finish reason (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message inside a completion choice
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChoiceMessage {
    /// Role (normally "assistant")
    #[serde(default)]
    pub role: String,
    /// Generated content, absent for some finish reasons
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatUsage {
    /// Input token count
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Output token count
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total token count
    #[serde(default)]
    pub total_tokens: u32,
}
