//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod answer;
pub mod health;

use crate::config::Settings;
use crate::middleware::logging::request_logging;
use crate::services::{AdvisoryService, CompletionApi, OpenAiApi};
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub advisor: Arc<AdvisoryService>,
}

/// Create application router with the default upstream client
pub async fn create_router(settings: Settings) -> Result<Router> {
    let api = Arc::new(OpenAiApi::new(&settings.upstream.base_url)?);
    create_router_with(settings, api).await
}

/// Create application router with a caller-supplied completion transport
pub async fn create_router_with(
    settings: Settings,
    api: Arc<dyn CompletionApi>,
) -> Result<Router> {
    // Create advisory service
    let advisor = Arc::new(AdvisoryService::new(settings.clone(), api));

    // Create application state
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        advisor,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_logging))
        .layer(build_cors_layer(&settings)?);

    // Create routes
    let router = Router::new()
        .route("/api/answer", post(answer::handle_answer))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(RequestBodyLimitLayer::new(settings.request.max_request_size))
        .layer(middleware_stack);

    Ok(router)
}

/// Build the CORS layer from configuration
fn build_cors_layer(settings: &Settings) -> Result<CorsLayer> {
    if !settings.security.cors_enabled {
        // Default layer permits nothing
        return Ok(CorsLayer::new());
    }

    if settings
        .security
        .allowed_origins
        .iter()
        .any(|origin| origin == "*")
    {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = settings
        .security
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
