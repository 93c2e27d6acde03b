//! Middleware module
//!
//! Request-level middleware applied around the handlers

pub mod logging;
