//! RubyGems integrations built from the application config

use tracing::debug;
use url::Url;

use gemgate_config::{read_rubygems_integration_configs, Config};
use gemgate_core::error::GemgateError;
use gemgate_core::types::RubygemsIntegrationConfig;
use gemgate_core::utils::host_with_port;
use crate::fetch::{rubygems_file_fetch_url, rubygems_request_options, RequestOptions};
use crate::RegistryResult;

/// Type name of RubyGems integrations
pub const INTEGRATION_TYPE: &str = "rubygems";

/// Config key holding the list of RubyGems integrations
const CONFIG_KEY: &str = "integrations.rubygems";

/// A single configured RubyGems registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubygemsIntegration {
    config: RubygemsIntegrationConfig,
}

impl RubygemsIntegration {
    /// Wrap an already validated config
    pub fn new(config: RubygemsIntegrationConfig) -> Self {
        Self { config }
    }

    /// Build all RubyGems integrations from the root application config.
    ///
    /// Reads `integrations.rubygems`; the default public RubyGems entry is
    /// added last when not configured explicitly.
    pub fn factory<C: Config>(config: &C) -> RegistryResult<IntegrationGroup> {
        let configs = config
            .get_optional_config_array(CONFIG_KEY)?
            .unwrap_or_default();
        let integrations: Vec<_> = read_rubygems_integration_configs(&configs)?
            .into_iter()
            .map(Self::new)
            .collect();

        debug!(count = integrations.len(), "Loaded RubyGems integrations");
        Ok(IntegrationGroup::new(integrations))
    }

    pub fn integration_type(&self) -> &'static str {
        INTEGRATION_TYPE
    }

    pub fn title(&self) -> &str {
        &self.config.host
    }

    pub fn config(&self) -> &RubygemsIntegrationConfig {
        &self.config
    }

    /// Resolve `url` relative to `base`; absolute URLs are returned as given
    pub fn resolve_url(&self, url: &str, base: &str) -> RegistryResult<String> {
        if Url::parse(url).is_ok() {
            return Ok(url.to_string());
        }

        let base_url = Url::parse(base).map_err(|e| GemgateError::invalid_url(base, e))?;
        let resolved = base_url
            .join(url)
            .map_err(|e| GemgateError::invalid_url(url, e))?;
        Ok(resolved.to_string())
    }

    /// Packages have no edit view, so the URL is returned unchanged
    pub fn resolve_edit_url(&self, url: &str) -> String {
        url.to_string()
    }

    /// Metadata API URL for a package page served by this registry
    pub async fn fetch_url(&self, url: &str) -> RegistryResult<String> {
        rubygems_file_fetch_url(url, &self.config).await
    }

    pub fn request_options(&self) -> RequestOptions {
        rubygems_request_options(&self.config)
    }
}

/// All configured RubyGems integrations, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationGroup {
    integrations: Vec<RubygemsIntegration>,
}

impl IntegrationGroup {
    pub fn new(integrations: Vec<RubygemsIntegration>) -> Self {
        Self { integrations }
    }

    pub fn list(&self) -> &[RubygemsIntegration] {
        &self.integrations
    }

    /// Find the integration configured for `host` (`host[:port]`)
    pub fn by_host(&self, host: &str) -> Option<&RubygemsIntegration> {
        self.integrations.iter().find(|i| i.config.host == host)
    }

    /// Find the integration whose host serves `url`
    pub fn by_url(&self, url: &str) -> Option<&RubygemsIntegration> {
        let parsed = Url::parse(url).ok()?;
        let host = host_with_port(&parsed)?;
        self.by_host(&host)
    }
}
