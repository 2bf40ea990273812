//! Utility functions and helpers.
//!
//! Common functionality used across multiple gemgate crates.

pub mod url;

// Re-export commonly used utilities
pub use self::url::{host_with_port, is_valid_host, is_valid_url, trim_trailing_slashes};
