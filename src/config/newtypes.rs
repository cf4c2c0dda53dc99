//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Dashboard API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use meraki_api::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef").unwrap();
/// assert_eq!(key.as_ref(), "0123456789abcdef");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Reads the key from the `MERAKI_DASHBOARD_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if the variable is unset and
    /// [`ConfigError::EmptyApiKey`] if it is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var("MERAKI_DASHBOARD_API_KEY")
            .map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(key)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Dashboard API base URL.
///
/// This newtype validates that the URL is an absolute `http(s)` URL and
/// normalizes it by stripping any trailing slash, so request paths can be
/// joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use meraki_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.meraki.com/api/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.meraki.com/api/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Dashboard API v1 base URL.
    pub const DEFAULT: &'static str = "https://api.meraki.com/api/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start with
    /// `http://` or `https://`, or has no host portion.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Returns the default production base URL.
    #[must_use]
    pub fn default_v1() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_non_empty() {
        let key = ApiKey::new("secret-key").unwrap();
        assert_eq!(key.as_ref(), "secret-key");
    }

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://api.meraki.com/api/v1").unwrap();
        assert_eq!(url.as_ref(), "https://api.meraki.com/api/v1");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.meraki.com/api/v1/").unwrap();
        assert_eq!(url.as_ref(), "https://api.meraki.com/api/v1");
    }

    #[test]
    fn test_base_url_accepts_http_for_test_servers() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        assert!(matches!(
            BaseUrl::new("ftp://api.meraki.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("api.meraki.com/api/v1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_missing_host() {
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("https:///api/v1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_default_v1_points_at_production() {
        assert_eq!(BaseUrl::default_v1().as_ref(), "https://api.meraki.com/api/v1");
    }
}
