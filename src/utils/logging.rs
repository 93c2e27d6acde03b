//! Logging utilities
//!
//! Helpers that produce compact, safe-to-log summaries of advisory queries.

use crate::models::QueryRequest;

/// Truncate a string with a note about original length.
/// Counts characters, not bytes, so Malayalam and Hindi prompts clip cleanly.
fn truncate_content(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let clipped: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", clipped, char_count - max_chars)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of an advisory query for logging
/// Keeps the structure but clips the prompt so log lines stay bounded
pub fn create_query_log_summary(query: &QueryRequest) -> serde_json::Value {
    let context = if query.context.is_empty() {
        serde_json::Value::Null
    } else {
        let extra_keys: Vec<&String> = query.context.extra.keys().collect();
        serde_json::json!({
            "crop": query.context.crop,
            "season": query.context.season,
            "location": query.context.location,
            "extra_keys": extra_keys,
        })
    };

    serde_json::json!({
        "prompt": truncate_content(&query.prompt, 200),
        "language": query.language,
        "context": context,
    })
}
