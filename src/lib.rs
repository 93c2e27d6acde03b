//! Krishi Advisory Proxy Library
//!
//! Answers farmer advisory queries through an OpenAI-compatible chat API,
//! with a client-side composer for drafting and submitting queries

pub mod composer;
pub mod config;
pub mod handlers;
pub mod locale;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use composer::{Composer, QueryDraft, SubmitOutcome};
pub use config::Settings;
pub use handlers::{create_router, create_router_with, AppState};
pub use locale::{advisory_pack, Language};
pub use models::{chat, query};
pub use services::{AdvisoryService, CompletionApi, OpenAiApi};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
