//! Transport helpers shared by the async and blocking dispatchers.
//!
//! Both session variants build URLs, default headers, response bodies and
//! retry decisions identically; only the I/O differs. The pure pieces live
//! here so the two dispatchers cannot drift apart.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::ApiResponse;
use crate::config::DashboardConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Dashboard API key.
pub const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

/// Builds the absolute URL for a request.
///
/// A path that already carries a scheme is used verbatim; that is how the
/// pager follows the absolute URLs found in `Link` headers. Relative paths
/// are joined to the base URL with a single `/`.
pub fn build_url(config: &DashboardConfig, request: &HttpRequest) -> String {
    if request.is_absolute() {
        return request.path.clone();
    }
    let path = request.path.trim_start_matches('/');
    format!("{}/{}", config.base_url(), path)
}

/// Builds the User-Agent string, folding in the optional usage-tracking
/// identifiers.
pub fn user_agent(config: &DashboardConfig) -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let mut agent = format!("meraki-api-rust/{SDK_VERSION} | Rust {rust_version}");
    if let Some(be_geo_id) = config.be_geo_id() {
        agent.push_str(" | BeGeoId ");
        agent.push_str(be_geo_id);
    }
    if let Some(caller) = config.caller() {
        agent.push_str(" | Caller ");
        agent.push_str(caller);
    }
    agent
}

/// Lowercases and collects response headers into a multi-value map.
pub fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Parses a response body into JSON.
///
/// An empty body (204 and friends) becomes JSON null. A body that is not
/// valid JSON is preserved as a JSON string so malformed responses surface
/// their raw text instead of a parse error.
pub fn parse_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

/// Serializes an error response body into a message string.
pub fn serialize_error(response: &ApiResponse) -> String {
    match &response.body {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(raw) => raw.clone(),
        other => other.to_string(),
    }
}

/// Decides whether a failed response should be retried, and after what wait.
///
/// Returns `None` when the response is not retryable under the session's
/// policy; the caller still enforces the retry budget. For 429 the server's
/// `Retry-After` value wins over the configured wait.
pub fn retry_wait(config: &DashboardConfig, response: &ApiResponse) -> Option<Duration> {
    if response.status == 429 {
        if !config.wait_on_rate_limit() {
            return None;
        }
        let wait = response
            .retry_after
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map_or(config.rate_limit_retry_wait(), Duration::from_secs_f64);
        return Some(wait);
    }

    if config.retry_on_other_errors() {
        return Some(config.other_error_retry_wait());
    }

    None
}

/// Returns `true` for network errors the session may retry when
/// `retry_on_timeout` is enabled.
pub fn is_retryable_network_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}

/// Applies the shared transport options to an async client builder.
///
/// # Errors
///
/// Returns [`crate::ConfigError::HttpTransport`] when the certificate file
/// cannot be read or parsed, or the proxy address is rejected.
pub fn configure_async_client(
    config: &DashboardConfig,
) -> Result<reqwest::ClientBuilder, crate::error::ConfigError> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(config.single_request_timeout());

    if let Some(certificate) = load_certificate(config)? {
        builder = builder.add_root_certificate(certificate);
    }
    if let Some(proxy) = build_proxy(config)? {
        builder = builder.proxy(proxy);
    }

    Ok(builder)
}

/// Applies the shared transport options to a blocking client builder.
///
/// # Errors
///
/// Returns [`crate::ConfigError::HttpTransport`] when the certificate file
/// cannot be read or parsed, or the proxy address is rejected.
pub fn configure_blocking_client(
    config: &DashboardConfig,
) -> Result<reqwest::blocking::ClientBuilder, crate::error::ConfigError> {
    let mut builder = reqwest::blocking::Client::builder()
        .use_rustls_tls()
        .timeout(config.single_request_timeout());

    if let Some(certificate) = load_certificate(config)? {
        builder = builder.add_root_certificate(certificate);
    }
    if let Some(proxy) = build_proxy(config)? {
        builder = builder.proxy(proxy);
    }

    Ok(builder)
}

fn load_certificate(
    config: &DashboardConfig,
) -> Result<Option<reqwest::Certificate>, crate::error::ConfigError> {
    let Some(path) = config.certificate_path() else {
        return Ok(None);
    };

    let pem = std::fs::read(path).map_err(|e| crate::error::ConfigError::HttpTransport {
        message: format!("cannot read certificate at {}: {e}", path.display()),
    })?;
    let certificate =
        reqwest::Certificate::from_pem(&pem).map_err(|e| crate::error::ConfigError::HttpTransport {
            message: format!("invalid certificate at {}: {e}", path.display()),
        })?;
    Ok(Some(certificate))
}

fn build_proxy(
    config: &DashboardConfig,
) -> Result<Option<reqwest::Proxy>, crate::error::ConfigError> {
    let Some(address) = config.requests_proxy() else {
        return Ok(None);
    };

    let proxy =
        reqwest::Proxy::all(address).map_err(|e| crate::error::ConfigError::HttpTransport {
            message: format!("invalid proxy address '{address}': {e}"),
        })?;
    Ok(Some(proxy))
}
