//! Service layer module
//!
//! Contains the advisory orchestration service and the upstream chat client

pub mod advisor;
pub mod upstream;

pub use advisor::AdvisoryService;
pub use upstream::{CompletionApi, OpenAiApi};
