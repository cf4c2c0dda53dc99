//! Error types for SDK configuration.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use meraki_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Provide a valid Dashboard API key or set MERAKI_DASHBOARD_API_KEY.")]
    EmptyApiKey,

    /// No API key was supplied and the environment variable is unset.
    #[error("Missing API key. Pass one to the builder or set the MERAKI_DASHBOARD_API_KEY environment variable.")]
    MissingApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'https://api.meraki.com/api/v1'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A numeric option is outside its valid range.
    #[error("Invalid value for '{option}': {reason}")]
    InvalidOption {
        /// The name of the offending option.
        option: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    ///
    /// Raised when the TLS certificate at `certificate_path` cannot be read
    /// or parsed, or when the proxy address is rejected by the transport.
    #[error("Failed to build the HTTP transport: {message}")]
    HttpTransport {
        /// Description of the transport failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("MERAKI_DASHBOARD_API_KEY"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://api.meraki.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://api.meraki.com"));
        assert!(message.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_invalid_option_error_message() {
        let error = ConfigError::InvalidOption {
            option: "maximum_concurrent_requests",
            reason: "must be at least 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("maximum_concurrent_requests"));
        assert!(message.contains("at least 1"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingApiKey;
        let _: &dyn std::error::Error = &error;
    }
}
