//! Configuration types for the Dashboard API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with the Meraki Dashboard API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DashboardConfig`]: The main configuration struct holding all SDK settings
//! - [`DashboardConfigBuilder`]: A builder for constructing [`DashboardConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL newtype
//!
//! # Environment Variables
//!
//! Three options fall back to the environment when not set explicitly:
//!
//! - `MERAKI_DASHBOARD_API_KEY` — the API key
//! - `BE_GEO_ID` — optional usage-tracking identifier
//! - `MERAKI_PYTHON_SDK_CALLER` — optional caller identifier, shared with the
//!   other Dashboard SDKs so existing deployment tooling keeps working
//!
//! # Example
//!
//! ```rust
//! use meraki_api::{DashboardConfig, ApiKey};
//!
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef").unwrap())
//!     .wait_on_rate_limit(true)
//!     .maximum_retries(4)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.wait_on_rate_limit());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
const DEFAULT_SINGLE_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Default wait before retrying a rate-limited request when the server
/// does not supply a `Retry-After` value.
const DEFAULT_RATE_LIMIT_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Default wait before retrying a non-429 client or server error.
const DEFAULT_OTHER_ERROR_RETRY_WAIT: Duration = Duration::from_secs(5);

/// Default retry budget per logical request.
const DEFAULT_MAXIMUM_RETRIES: u32 = 2;

/// Default cap on simultaneously in-flight async requests.
const DEFAULT_MAXIMUM_CONCURRENT_REQUESTS: usize = 5;

/// Configuration for the Dashboard API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// key, base URL, timeouts, retry policy, transport options, and optional
/// usage-tracking identifiers.
///
/// # Thread Safety
///
/// `DashboardConfig` is `Clone`, `Send`, and `Sync`. It is immutable after
/// construction and shared read-only by every request a session issues.
///
/// # Example
///
/// ```rust
/// use meraki_api::{DashboardConfig, ApiKey, BaseUrl};
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef").unwrap())
///     .base_url(BaseUrl::new("https://api.meraki.com/api/v1").unwrap())
///     .simulate(true)
///     .build()
///     .unwrap();
///
/// assert!(config.simulate());
/// ```
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    single_request_timeout: Duration,
    certificate_path: Option<PathBuf>,
    requests_proxy: Option<String>,
    wait_on_rate_limit: bool,
    rate_limit_retry_wait: Duration,
    retry_on_other_errors: bool,
    other_error_retry_wait: Duration,
    retry_on_timeout: bool,
    maximum_retries: u32,
    simulate: bool,
    maximum_concurrent_requests: usize,
    be_geo_id: Option<String>,
    caller: Option<String>,
}

impl DashboardConfig {
    /// Creates a new builder for constructing a `DashboardConfig`.
    #[must_use]
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn single_request_timeout(&self) -> Duration {
        self.single_request_timeout
    }

    /// Returns the path to an extra TLS trust anchor, if configured.
    #[must_use]
    pub fn certificate_path(&self) -> Option<&std::path::Path> {
        self.certificate_path.as_deref()
    }

    /// Returns the proxy address, if configured.
    #[must_use]
    pub fn requests_proxy(&self) -> Option<&str> {
        self.requests_proxy.as_deref()
    }

    /// Returns whether rate-limited (429) requests are retried.
    #[must_use]
    pub const fn wait_on_rate_limit(&self) -> bool {
        self.wait_on_rate_limit
    }

    /// Returns the fallback wait before retrying a 429 response.
    #[must_use]
    pub const fn rate_limit_retry_wait(&self) -> Duration {
        self.rate_limit_retry_wait
    }

    /// Returns whether non-429 4xx/5xx responses are retried.
    #[must_use]
    pub const fn retry_on_other_errors(&self) -> bool {
        self.retry_on_other_errors
    }

    /// Returns the wait before retrying a non-429 error response.
    #[must_use]
    pub const fn other_error_retry_wait(&self) -> Duration {
        self.other_error_retry_wait
    }

    /// Returns whether network errors and timeouts are retried.
    #[must_use]
    pub const fn retry_on_timeout(&self) -> bool {
        self.retry_on_timeout
    }

    /// Returns the retry budget applied to each logical request.
    #[must_use]
    pub const fn maximum_retries(&self) -> u32 {
        self.maximum_retries
    }

    /// Returns whether write operations are short-circuited (dry-run mode).
    #[must_use]
    pub const fn simulate(&self) -> bool {
        self.simulate
    }

    /// Returns the cap on simultaneously in-flight async requests.
    #[must_use]
    pub const fn maximum_concurrent_requests(&self) -> usize {
        self.maximum_concurrent_requests
    }

    /// Returns the `BE_GEO_ID` usage-tracking identifier, if configured.
    #[must_use]
    pub fn be_geo_id(&self) -> Option<&str> {
        self.be_geo_id.as_deref()
    }

    /// Returns the caller identifier appended to the User-Agent, if configured.
    #[must_use]
    pub fn caller(&self) -> Option<&str> {
        self.caller.as_deref()
    }
}

// Verify DashboardConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DashboardConfig>();
};

/// Builder for constructing [`DashboardConfig`] instances.
///
/// The only required field is the API key, which may also come from the
/// `MERAKI_DASHBOARD_API_KEY` environment variable. All other fields have
/// defaults matching the production Dashboard API.
///
/// # Defaults
///
/// - `base_url`: `https://api.meraki.com/api/v1`
/// - `single_request_timeout`: 60 seconds
/// - `wait_on_rate_limit`: `true`
/// - `rate_limit_retry_wait`: 1 second (server `Retry-After` preferred)
/// - `retry_on_other_errors`: `false`
/// - `other_error_retry_wait`: 5 seconds
/// - `retry_on_timeout`: `false`
/// - `maximum_retries`: 2
/// - `simulate`: `false`
/// - `maximum_concurrent_requests`: 5
///
/// # Example
///
/// ```rust
/// use meraki_api::{DashboardConfig, ApiKey};
/// use std::time::Duration;
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef").unwrap())
///     .single_request_timeout(Duration::from_secs(30))
///     .maximum_concurrent_requests(10)
///     .caller("AcmeProvisioner/2.1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    single_request_timeout: Option<Duration>,
    certificate_path: Option<PathBuf>,
    requests_proxy: Option<String>,
    wait_on_rate_limit: Option<bool>,
    rate_limit_retry_wait: Option<Duration>,
    retry_on_other_errors: Option<bool>,
    other_error_retry_wait: Option<Duration>,
    retry_on_timeout: Option<bool>,
    maximum_retries: Option<u32>,
    simulate: Option<bool>,
    maximum_concurrent_requests: Option<usize>,
    be_geo_id: Option<String>,
    caller: Option<String>,
}

impl DashboardConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    ///
    /// When not set, `build()` falls back to `MERAKI_DASHBOARD_API_KEY`.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn single_request_timeout(mut self, timeout: Duration) -> Self {
        self.single_request_timeout = Some(timeout);
        self
    }

    /// Sets the path to a PEM file added to the TLS trust store.
    #[must_use]
    pub fn certificate_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.certificate_path = Some(path.into());
        self
    }

    /// Sets the proxy address used for all requests.
    #[must_use]
    pub fn requests_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.requests_proxy = Some(proxy.into());
        self
    }

    /// Sets whether rate-limited (429) requests are retried automatically.
    #[must_use]
    pub const fn wait_on_rate_limit(mut self, wait: bool) -> Self {
        self.wait_on_rate_limit = Some(wait);
        self
    }

    /// Sets the fallback wait between 429 retries.
    ///
    /// A `Retry-After` value supplied by the server takes precedence.
    #[must_use]
    pub const fn rate_limit_retry_wait(mut self, wait: Duration) -> Self {
        self.rate_limit_retry_wait = Some(wait);
        self
    }

    /// Sets whether non-429 4xx/5xx responses are retried.
    #[must_use]
    pub const fn retry_on_other_errors(mut self, retry: bool) -> Self {
        self.retry_on_other_errors = Some(retry);
        self
    }

    /// Sets the wait between retries of non-429 error responses.
    #[must_use]
    pub const fn other_error_retry_wait(mut self, wait: Duration) -> Self {
        self.other_error_retry_wait = Some(wait);
        self
    }

    /// Sets whether network errors and timeouts are retried.
    #[must_use]
    pub const fn retry_on_timeout(mut self, retry: bool) -> Self {
        self.retry_on_timeout = Some(retry);
        self
    }

    /// Sets the retry budget applied to each logical request.
    #[must_use]
    pub const fn maximum_retries(mut self, retries: u32) -> Self {
        self.maximum_retries = Some(retries);
        self
    }

    /// Sets dry-run mode: POST/PUT/DELETE return a success-shaped
    /// placeholder without touching the network. GET requests still run.
    #[must_use]
    pub const fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = Some(simulate);
        self
    }

    /// Sets the cap on simultaneously in-flight async requests.
    #[must_use]
    pub const fn maximum_concurrent_requests(mut self, limit: usize) -> Self {
        self.maximum_concurrent_requests = Some(limit);
        self
    }

    /// Sets the `BE_GEO_ID` usage-tracking identifier.
    ///
    /// When not set, `build()` falls back to the `BE_GEO_ID` environment
    /// variable.
    #[must_use]
    pub fn be_geo_id(mut self, id: impl Into<String>) -> Self {
        self.be_geo_id = Some(id.into());
        self
    }

    /// Sets the caller identifier appended to the User-Agent header.
    ///
    /// When not set, `build()` falls back to the `MERAKI_PYTHON_SDK_CALLER`
    /// environment variable.
    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Builds the [`DashboardConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no key was supplied and
    /// `MERAKI_DASHBOARD_API_KEY` is unset, and
    /// [`ConfigError::InvalidOption`] when `maximum_concurrent_requests`
    /// is zero.
    pub fn build(self) -> Result<DashboardConfig, ConfigError> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => ApiKey::from_env()?,
        };

        let maximum_concurrent_requests = self
            .maximum_concurrent_requests
            .unwrap_or(DEFAULT_MAXIMUM_CONCURRENT_REQUESTS);
        if maximum_concurrent_requests == 0 {
            return Err(ConfigError::InvalidOption {
                option: "maximum_concurrent_requests",
                reason: "must be at least 1".to_string(),
            });
        }

        let be_geo_id = self
            .be_geo_id
            .or_else(|| std::env::var("BE_GEO_ID").ok())
            .filter(|id| !id.is_empty());
        let caller = self
            .caller
            .or_else(|| std::env::var("MERAKI_PYTHON_SDK_CALLER").ok())
            .filter(|caller| !caller.is_empty());

        Ok(DashboardConfig {
            api_key,
            base_url: self.base_url.unwrap_or_else(BaseUrl::default_v1),
            single_request_timeout: self
                .single_request_timeout
                .unwrap_or(DEFAULT_SINGLE_REQUEST_TIMEOUT),
            certificate_path: self.certificate_path,
            requests_proxy: self.requests_proxy,
            wait_on_rate_limit: self.wait_on_rate_limit.unwrap_or(true),
            rate_limit_retry_wait: self
                .rate_limit_retry_wait
                .unwrap_or(DEFAULT_RATE_LIMIT_RETRY_WAIT),
            retry_on_other_errors: self.retry_on_other_errors.unwrap_or(false),
            other_error_retry_wait: self
                .other_error_retry_wait
                .unwrap_or(DEFAULT_OTHER_ERROR_RETRY_WAIT),
            retry_on_timeout: self.retry_on_timeout.unwrap_or(false),
            maximum_retries: self.maximum_retries.unwrap_or(DEFAULT_MAXIMUM_RETRIES),
            simulate: self.simulate.unwrap_or(false),
            maximum_concurrent_requests,
            be_geo_id,
            caller,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("0123456789abcdef").unwrap()
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DashboardConfig::builder()
            .api_key(test_key())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.meraki.com/api/v1");
        assert_eq!(config.single_request_timeout(), Duration::from_secs(60));
        assert!(config.wait_on_rate_limit());
        assert_eq!(config.rate_limit_retry_wait(), Duration::from_secs(1));
        assert!(!config.retry_on_other_errors());
        assert_eq!(config.other_error_retry_wait(), Duration::from_secs(5));
        assert!(!config.retry_on_timeout());
        assert_eq!(config.maximum_retries(), 2);
        assert!(!config.simulate());
        assert_eq!(config.maximum_concurrent_requests(), 5);
        assert!(config.certificate_path().is_none());
        assert!(config.requests_proxy().is_none());
    }

    #[test]
    fn test_builder_with_all_options() {
        let config = DashboardConfig::builder()
            .api_key(test_key())
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .single_request_timeout(Duration::from_secs(10))
            .certificate_path("/etc/ssl/extra.pem")
            .requests_proxy("http://proxy.internal:3128")
            .wait_on_rate_limit(false)
            .rate_limit_retry_wait(Duration::from_millis(250))
            .retry_on_other_errors(true)
            .other_error_retry_wait(Duration::from_secs(2))
            .retry_on_timeout(true)
            .maximum_retries(7)
            .simulate(true)
            .maximum_concurrent_requests(12)
            .be_geo_id("test-geo")
            .caller("AcmeProvisioner/2.1")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.single_request_timeout(), Duration::from_secs(10));
        assert_eq!(
            config.certificate_path(),
            Some(std::path::Path::new("/etc/ssl/extra.pem"))
        );
        assert_eq!(config.requests_proxy(), Some("http://proxy.internal:3128"));
        assert!(!config.wait_on_rate_limit());
        assert_eq!(config.rate_limit_retry_wait(), Duration::from_millis(250));
        assert!(config.retry_on_other_errors());
        assert_eq!(config.other_error_retry_wait(), Duration::from_secs(2));
        assert!(config.retry_on_timeout());
        assert_eq!(config.maximum_retries(), 7);
        assert!(config.simulate());
        assert_eq!(config.maximum_concurrent_requests(), 12);
        assert_eq!(config.be_geo_id(), Some("test-geo"));
        assert_eq!(config.caller(), Some("AcmeProvisioner/2.1"));
    }

    #[test]
    fn test_zero_concurrency_limit_is_rejected() {
        let result = DashboardConfig::builder()
            .api_key(test_key())
            .maximum_concurrent_requests(0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOption {
                option: "maximum_concurrent_requests",
                ..
            })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DashboardConfig>();
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = DashboardConfig::builder()
            .api_key(ApiKey::new("super-secret").unwrap())
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(debug.contains("DashboardConfig"));
        assert!(!debug.contains("super-secret"));
    }
}
