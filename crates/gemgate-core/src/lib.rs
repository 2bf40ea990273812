//! # gemgate-core
//!
//! Core types and utilities shared across all gemgate crates.
//!
//! This crate provides:
//! - The `RubygemsIntegrationConfig` record and public-registry constants
//! - `GemgateError` for unified error handling
//! - Host and URL validation helpers
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{GemgateError, GemgateResult};
pub use types::{RubygemsIntegrationConfig, RUBYGEMS_API_BASE_URL, RUBYGEMS_HOST};
