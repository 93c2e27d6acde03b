//! Advisory query data models
//!
//! Defines the inbound query structure and the outbound answer and error
//! bodies for the advisory endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound advisory query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    /// Natural-language question from the farmer
    #[serde(default)]
    pub prompt: String,
    /// Locale code; "ml" and "hi" are recognized, everything else is English
    #[serde(default = "default_language")]
    pub language: String,
    /// Situational hints, accepted as-is
    #[serde(default)]
    pub context: QueryContext,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for QueryRequest {
    fn default() -> Self {
        QueryRequest {
            prompt: String::new(),
            language: default_language(),
            context: QueryContext::default(),
        }
    }
}

impl QueryRequest {
    /// Build a query from a raw request body.
    ///
    /// Parsing is lenient: an absent body, invalid JSON, or wrongly typed
    /// fields degrade to defaults instead of rejecting the request. The
    /// empty-prompt check downstream produces the actual client error.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self::from_value(&value)
    }

    fn from_value(value: &Value) -> Self {
        let prompt = value
            .get("prompt")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let language = value
            .get("language")
            .and_then(Value::as_str)
            .unwrap_or("en")
            .to_string();
        let context = value
            .get("context")
            .map(QueryContext::from_value)
            .unwrap_or_default();

        QueryRequest {
            prompt,
            language,
            context,
        }
    }
}

/// Optional hints accompanying a query
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QueryContext {
    /// Crop the question is about (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    /// Season hint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Location hint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Any further hints, preserved without interpretation
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl QueryContext {
    fn from_value(value: &Value) -> Self {
        let mut context = QueryContext::default();
        if let Some(map) = value.as_object() {
            for (key, entry) in map {
                match key.as_str() {
                    "crop" => context.crop = entry.as_str().map(str::to_string),
                    "season" => context.season = entry.as_str().map(str::to_string),
                    "location" => context.location = entry.as_str().map(str::to_string),
                    _ => {
                        context.extra.insert(key.clone(), entry.clone());
                    }
                }
            }
        }
        context
    }

    /// Whether no hint at all was supplied
    pub fn is_empty(&self) -> bool {
        self.crop.is_none()
            && self.season.is_none()
            && self.location.is_none()
            && self.extra.is_empty()
    }
}

/// Successful answer body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    /// Model output or localized placeholder
    pub answer: String,
    /// Present (and true) only when the placeholder path produced the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mocked: Option<bool>,
}

impl Answer {
    /// Answer produced by the upstream model
    pub fn live(answer: String) -> Self {
        Answer {
            answer,
            mocked: None,
        }
    }

    /// Canned answer produced without an upstream call
    pub fn mocked(placeholder: &str) -> Self {
        Answer {
            answer: placeholder.to_string(),
            mocked: Some(true),
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
}
