//! Health check handlers
//!
//! Provides application health status check endpoints

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Current answer mode: "live" with a credential, "mock" without
    pub answer_mode: String,
    /// Configuration status
    pub config: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Basic health check
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    let response = HealthResponse {
        status: "healthy".to_string(),
        service: "Krishi Advisory Proxy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            answer_mode: current_answer_mode(&state),
            config: "valid".to_string(),
            uptime_seconds: get_uptime_seconds(),
        }),
    };

    Json(response)
}

/// Liveness check
///
/// GET /health/live
/// Confirms the service is running; checks no external dependencies
pub async fn liveness_check(State(_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");

    let response = HealthResponse {
        status: "alive".to_string(),
        service: "Krishi Advisory Proxy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            answer_mode: "not_checked".to_string(),
            config: "valid".to_string(),
            uptime_seconds: get_uptime_seconds(),
        }),
    };

    Json(response)
}

/// Answer mode as decided by the same per-request credential lookup the
/// advisory service uses
fn current_answer_mode(state: &AppState) -> String {
    if state.settings.has_upstream_credential() {
        "live".to_string()
    } else {
        "mock".to_string()
    }
}

/// Get service uptime in seconds
fn get_uptime_seconds() -> u64 {
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    static START_TIME: OnceLock<u64> = OnceLock::new();

    let start_time = *START_TIME.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let current_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    current_time.saturating_sub(start_time)
}
