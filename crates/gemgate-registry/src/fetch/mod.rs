//! Fetch URL construction and request options for RubyGems registries

use std::collections::HashMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;
use url::Url;

use gemgate_config::rubygems_integration_relative_path;
use gemgate_core::error::GemgateError;
use gemgate_core::types::RubygemsIntegrationConfig;
use crate::RegistryResult;

/// Header carrying the integration token
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Path of the metadata API below the registry mount point
const API_PATH: &str = "api/v1";

/// Options to attach to requests made against a registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Header name to value
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Convert the headers for use with an HTTP client
    pub fn header_map(&self) -> RegistryResult<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| GemgateError::InvalidHeader {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| GemgateError::InvalidHeader {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Given a URL pointing to a package page, returns a URL that fetches the
/// package metadata as JSON.
///
/// Converts
/// from: https://rubygems.org/gems/simplycop
/// to:   https://rubygems.org/api/v1/gems/simplycop.json
pub async fn rubygems_file_fetch_url(
    url: &str,
    config: &RubygemsIntegrationConfig,
) -> RegistryResult<String> {
    Ok(build_package_url(url, config)?.to_string())
}

/// Gets the request options necessary to make requests to a given registry.
///
/// The token header is always present and empty for anonymous access.
pub fn rubygems_request_options(config: &RubygemsIntegrationConfig) -> RequestOptions {
    let token = config.token.clone().unwrap_or_default();
    RequestOptions {
        headers: HashMap::from([(TOKEN_HEADER.to_string(), token)]),
    }
}

/// Rewrite a package page URL into its metadata API URL.
///
/// The new path is the registry mount path (if any), then `api/v1`, then
/// the original path with `.json` appended. Scheme, host, port, query and
/// fragment are kept.
pub fn build_package_url(
    target: &str,
    config: &RubygemsIntegrationConfig,
) -> RegistryResult<Url> {
    let mut url = Url::parse(target).map_err(|e| GemgateError::invalid_url(target, e))?;
    let relative_path = rubygems_integration_relative_path(config)?;

    let package_path = format!("{}.json", url.path().trim_start_matches('/'));
    let mut segments = Vec::with_capacity(3);
    if !relative_path.is_empty() {
        segments.push(relative_path.as_str());
    }
    segments.push(API_PATH);
    segments.push(package_path.as_str());

    let path = format!("/{}", segments.join("/").trim_start_matches('/'));
    url.set_path(&path);

    trace!(from = target, to = %url, "Built package API URL");
    Ok(url)
}
