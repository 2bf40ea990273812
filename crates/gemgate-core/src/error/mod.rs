//! Error types and result aliases for gemgate operations.
//!
//! Two families of failures exist: configuration problems, surfaced while
//! integration configs are loaded, and URL problems, surfaced while a package
//! page URL is turned into an API URL.

use thiserror::Error;

/// Unified error type for all gemgate operations
#[derive(Error, Debug)]
pub enum GemgateError {
    // Config errors
    #[error("Invalid Rubygems integration config, '{value}' is not a valid {field}")]
    ConfigValidation { field: String, value: String },

    #[error("Missing required config value at '{key}'")]
    ConfigMissing { key: String },

    #[error("Invalid type in config for key '{key}', got {actual}, wanted {expected}")]
    ConfigType {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    // URL errors
    #[error("Incorrect url: {url}, {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}

/// Result type alias for gemgate operations
pub type GemgateResult<T> = Result<T, GemgateError>;

impl GemgateError {
    /// Create a validation error for a config field holding a bad value
    pub fn validation(field: &str, value: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Create a URL error from a parse failure
    pub fn invalid_url(url: &str, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            source,
        }
    }

    /// Check if this error came from loading configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GemgateError::ConfigValidation { .. }
                | GemgateError::ConfigMissing { .. }
                | GemgateError::ConfigType { .. }
                | GemgateError::ConfigParse { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            GemgateError::ConfigValidation { field, .. } if field == "apiBaseUrl" => {
                Some("Self-hosted registries must set apiBaseUrl explicitly")
            },
            GemgateError::ConfigValidation { field, .. } if field == "host" => {
                Some("Use a bare hostname such as 'rubygems.example.com', without scheme or path")
            },
            GemgateError::InvalidUrl { .. } => {
                Some("Pass an absolute URL such as 'https://rubygems.org/gems/rails'")
            },
            _ => None,
        }
    }
}
