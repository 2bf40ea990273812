//! Core data types for gemgate.
//!
//! Currently only the RubyGems integration record and its well-known
//! public-registry constants.

pub mod integration;

// Re-export all public types
pub use integration::{RubygemsIntegrationConfig, RUBYGEMS_API_BASE_URL, RUBYGEMS_HOST};
