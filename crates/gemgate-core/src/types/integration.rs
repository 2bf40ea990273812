//! RubyGems integration configuration record.

use serde::{Deserialize, Serialize};

/// Host of the public RubyGems registry
pub const RUBYGEMS_HOST: &str = "rubygems.org";

/// API base URL of the public RubyGems registry
pub const RUBYGEMS_API_BASE_URL: &str = "https://rubygems.org/api/v1";

/// The configuration parameters for a single RubyGems integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubygemsIntegrationConfig {
    /// The host this integration matches on, e.g. `rubygems.org`
    pub host: String,

    /// The base URL of the registry API, with no trailing slash.
    ///
    /// Only deduced for public RubyGems; self-hosted registries must set it.
    pub api_base_url: String,

    /// Token sent with requests; `None` means anonymous access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// The base URL of the registry, e.g. `https://rubygems.org`.
    ///
    /// Defaults to `https://{host}`. A path component marks a registry
    /// mounted below the root of its host.
    pub base_url: String,
}

impl RubygemsIntegrationConfig {
    /// The fully defaulted, unauthenticated entry for public RubyGems
    pub fn public() -> Self {
        Self {
            host: RUBYGEMS_HOST.to_string(),
            api_base_url: RUBYGEMS_API_BASE_URL.to_string(),
            token: None,
            base_url: format!("https://{}", RUBYGEMS_HOST),
        }
    }

    /// Whether this entry targets the public registry
    pub fn is_public(&self) -> bool {
        self.host == RUBYGEMS_HOST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_defaults() {
        let config = RubygemsIntegrationConfig::public();
        assert!(config.is_public());
        assert_eq!(config.api_base_url, "https://rubygems.org/api/v1");
        assert_eq!(config.base_url, "https://rubygems.org");
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let config = RubygemsIntegrationConfig {
            host: "gems.example.com".to_string(),
            api_base_url: "https://gems.example.com/api/v1".to_string(),
            token: None,
            base_url: "https://gems.example.com".to_string(),
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "host": "gems.example.com",
                "apiBaseUrl": "https://gems.example.com/api/v1",
                "baseUrl": "https://gems.example.com",
            })
        );

        let back: RubygemsIntegrationConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
