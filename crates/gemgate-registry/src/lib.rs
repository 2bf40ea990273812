//! RubyGems registry integration for gemgate
//!
//! This crate turns package page URLs into metadata API URLs, builds the
//! request options for the HTTP layer and groups the configured
//! integrations for lookup by host or URL.

pub mod fetch;
pub mod integration;

// Re-export main types
pub use fetch::{build_package_url, rubygems_file_fetch_url, rubygems_request_options, RequestOptions};
pub use integration::{IntegrationGroup, RubygemsIntegration};

use gemgate_core::error::GemgateError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, GemgateError>;
