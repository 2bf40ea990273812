//! RubyGems integration config reading, defaulting and validation

use tracing::debug;
use url::Url;
use gemgate_core::error::GemgateError;
use gemgate_core::types::{RubygemsIntegrationConfig, RUBYGEMS_API_BASE_URL, RUBYGEMS_HOST};
use gemgate_core::utils::{is_valid_host, is_valid_url, trim_trailing_slashes};
use crate::{ConfigResult, tree::Config};

/// Read a single RubyGems integration config.
///
/// `apiBaseUrl` is only deduced for public RubyGems and `baseUrl` falls back
/// to `https://{host}`. Both lose any trailing slashes. Validation stops at
/// the first invalid field, checking `host`, `apiBaseUrl` and `baseUrl` in
/// that order.
pub fn read_rubygems_integration_config<C: Config>(
    config: &C,
) -> ConfigResult<RubygemsIntegrationConfig> {
    let host = config.get_string("host")?;
    let api_base_url = non_empty(config.get_optional_string("apiBaseUrl")?);
    let token = non_empty(config.get_optional_string("token")?);
    let base_url = non_empty(config.get_optional_string("baseUrl")?);

    let api_base_url = match api_base_url {
        Some(url) => Some(trim_trailing_slashes(&url).to_string()),
        None if host == RUBYGEMS_HOST => Some(RUBYGEMS_API_BASE_URL.to_string()),
        None => None,
    };

    let base_url = match base_url {
        Some(url) => trim_trailing_slashes(&url).to_string(),
        None => format!("https://{}", host),
    };

    if !is_valid_host(&host) {
        return Err(GemgateError::validation("host", host));
    }

    let api_base_url = match api_base_url {
        Some(url) if is_valid_url(&url) => url,
        other => return Err(GemgateError::validation("apiBaseUrl", other.unwrap_or_default())),
    };

    if !is_valid_url(&base_url) {
        return Err(GemgateError::validation("baseUrl", base_url));
    }

    Ok(RubygemsIntegrationConfig {
        host,
        api_base_url,
        token,
        base_url,
    })
}

/// Read a set of RubyGems integration configs.
///
/// Any invalid entry fails the whole read. Unless one of the entries already
/// targets public RubyGems, an unauthenticated default entry for it is
/// appended last.
pub fn read_rubygems_integration_configs<C: Config>(
    configs: &[C],
) -> ConfigResult<Vec<RubygemsIntegrationConfig>> {
    let mut result = configs
        .iter()
        .map(read_rubygems_integration_config)
        .collect::<ConfigResult<Vec<_>>>()?;

    if !result.iter().any(RubygemsIntegrationConfig::is_public) {
        debug!("No explicit {} integration, adding the default entry", RUBYGEMS_HOST);
        result.push(RubygemsIntegrationConfig::public());
    }

    Ok(result)
}

/// Path under which the registry of `config` is mounted.
///
/// Public RubyGems is always served from the root, so this is empty for it.
/// Self-hosted registries use the path of their `baseUrl`, without trailing
/// slashes.
pub fn rubygems_integration_relative_path(
    config: &RubygemsIntegrationConfig,
) -> ConfigResult<String> {
    if config.is_public() {
        return Ok(String::new());
    }

    let base_url = Url::parse(&config.base_url)
        .map_err(|_| GemgateError::validation("baseUrl", config.base_url.as_str()))?;
    let relative_path = trim_trailing_slashes(base_url.path()).to_string();

    debug!(host = %config.host, relative_path = %relative_path, "Resolved registry mount path");
    Ok(relative_path)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
