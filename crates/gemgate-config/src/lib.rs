//! Configuration reading for gemgate
//!
//! This crate turns a generic configuration tree into validated RubyGems
//! integration configs, filling in the defaults for public RubyGems.

pub mod tree;
pub mod rubygems;

// Re-export main types
pub use tree::{Config, JsonConfig};
pub use rubygems::{
    read_rubygems_integration_config, read_rubygems_integration_configs,
    rubygems_integration_relative_path,
};

use gemgate_core::error::GemgateError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, GemgateError>;
