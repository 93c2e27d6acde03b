//! Advisory answer handler
//!
//! Handles POST /api/answer requests

use crate::handlers::AppState;
use crate::models::query::{Answer, QueryRequest};
use crate::utils::error::AppResult;
use crate::utils::logging::create_query_log_summary;
use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;
use tracing::debug;

/// Handle one advisory answer request
///
/// The body is read raw and parsed leniently: malformed JSON never rejects a
/// request at the framework level, it falls through to the empty-prompt check.
pub async fn handle_answer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<Answer>> {
    let query = QueryRequest::from_body(&body);

    // 🔍 DEBUG: 记录客户端请求摘要
    if let Ok(summary_json) = serde_json::to_string_pretty(&create_query_log_summary(&query)) {
        debug!("📥 Advisory query:\n{}", summary_json);
    }

    let answer = state.advisor.answer(&query).await?;

    Ok(Json(answer))
}
