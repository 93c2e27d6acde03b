//! Data models module
//!
//! Defines the advisory query contract and the upstream chat completion
//! wire structures.

pub mod chat;
pub mod query;

pub use chat::*;
pub use query::*;
