//! HTTP-specific error types for the Dashboard API SDK.
//!
//! This module contains error types for session operations: error responses,
//! retry exhaustion, pre-flight request validation, and argument validation
//! performed by endpoint methods.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxRetriesExceededError`]: When the retry budget is exhausted
//! - [`InvalidRequestError`]: When a request fails validation before sending
//! - [`ArgumentError`]: When an endpoint argument is rejected before any
//!   network call is made
//! - [`ApiError`]: Unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_api::{ApiError, RestClient};
//!
//! match client.get("/organizations", None).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(ApiError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e.message);
//!     }
//!     Err(ApiError::MaxRetries(e)) => {
//!         println!("Gave up after {} retries", e.retries);
//!     }
//!     Err(ApiError::Network(e)) => {
//!         println!("Could not reach the dashboard: {e}");
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The `message` field carries the parsed JSON error payload serialized back
/// to a string, or the raw response text when the body was not valid JSON.
///
/// # Example
///
/// ```rust
/// use meraki_api::ApiResponseError;
///
/// let error = ApiResponseError {
///     status: 404,
///     message: r#"{"errors":["Organization not found"]}"#.to_string(),
///     operation: Some("getOrganization"),
/// };
///
/// println!("Status {}: {}", error.status, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{status} status returned: {message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Serialized error payload, or raw response text when not JSON.
    pub message: String,
    /// The generated operation that produced the request, when known.
    pub operation: Option<&'static str>,
}

impl ApiResponseError {
    /// Returns `true` for a rate-limit (429) response.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Error returned when the retry budget has been exhausted.
///
/// Raised when a request keeps failing with a retryable status after all
/// configured retries have been spent. The final response is preserved.
///
/// # Example
///
/// ```rust
/// use meraki_api::MaxRetriesExceededError;
///
/// let error = MaxRetriesExceededError {
///     status: 429,
///     retries: 2,
///     message: r#"{"errors":["Rate limit exceeded"]}"#.to_string(),
/// };
///
/// println!("{}", error);
/// ```
#[derive(Debug, Error)]
#[error("Exceeded the retry budget of {retries}. Last response was {status}: {message}")]
pub struct MaxRetriesExceededError {
    /// The HTTP status code of the final response.
    pub status: u16,
    /// The number of retries that were performed.
    pub retries: u32,
    /// Serialized error payload from the final response.
    pub message: String,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// Request parameters could not be serialized to JSON.
    #[error("Cannot serialize request parameters: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },
}

/// Error returned by endpoint methods for rejected arguments.
///
/// Argument errors are raised synchronously, before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// An enumerated parameter received a value outside its allowed set.
    #[error("Invalid value '{value}' for parameter '{parameter}'. Allowed values: {}.", allowed.join(", "))]
    InvalidValue {
        /// The parameter name as it appears in the API.
        parameter: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values.
        allowed: &'static [&'static str],
    },

    /// A mutually-exclusive parameter combination was violated.
    #[error("Exactly one of {} must be provided.", parameters.join(", "))]
    MutuallyExclusive {
        /// The parameters in the exclusive group.
        parameters: &'static [&'static str],
    },
}

/// Unified error type for all session and endpoint operations.
///
/// Network failures are a distinct variant from HTTP-level errors so callers
/// can tell "could not reach the dashboard" apart from "the dashboard
/// rejected the request".
#[derive(Debug, Error)]
pub enum ApiError {
    /// An endpoint argument was rejected before any network call.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A non-2xx response was received.
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// The retry budget was exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// The request could not be completed (DNS, connection, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the HTTP status code carried by this error, when there is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::MaxRetries(e) => Some(e.status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Argument(_) | Self::InvalidRequest(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message_includes_status() {
        let error = ApiResponseError {
            status: 404,
            message: r#"{"errors":["Not found"]}"#.to_string(),
            operation: None,
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not found"));
    }

    #[test]
    fn test_response_error_identifies_rate_limit() {
        let limited = ApiResponseError {
            status: 429,
            message: String::new(),
            operation: None,
        };
        assert!(limited.is_rate_limited());

        let not_limited = ApiResponseError {
            status: 400,
            message: String::new(),
            operation: None,
        };
        assert!(!not_limited.is_rate_limited());
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxRetriesExceededError {
            status: 429,
            retries: 3,
            message: r#"{"errors":["Rate limit exceeded"]}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("retry budget of 3"));
        assert!(message.contains("429"));
    }

    #[test]
    fn test_invalid_value_error_lists_allowed_values() {
        let error = ArgumentError::InvalidValue {
            parameter: "orgAccess",
            value: "superuser".to_string(),
            allowed: &["full", "read-only", "none"],
        };
        let message = error.to_string();
        assert!(message.contains("superuser"));
        assert!(message.contains("orgAccess"));
        assert!(message.contains("full, read-only, none"));
    }

    #[test]
    fn test_mutually_exclusive_error_lists_parameters() {
        let error = ArgumentError::MutuallyExclusive {
            parameters: &["order", "serial", "licenseKey"],
        };
        assert!(error.to_string().contains("order, serial, licenseKey"));
    }

    #[test]
    fn test_api_error_reports_status() {
        let error = ApiError::from(ApiResponseError {
            status: 502,
            message: "Bad Gateway".to_string(),
            operation: None,
        });
        assert_eq!(error.status(), Some(502));

        let argument = ApiError::from(ArgumentError::MutuallyExclusive {
            parameters: &["order", "serial"],
        });
        assert_eq!(argument.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &ApiResponseError {
            status: 400,
            message: "test".to_string(),
            operation: None,
        };
        let _ = response;

        let retries: &dyn std::error::Error = &MaxRetriesExceededError {
            status: 429,
            retries: 2,
            message: "test".to_string(),
        };
        let _ = retries;

        let invalid: &dyn std::error::Error = &InvalidRequestError::EmptyPath;
        let _ = invalid;
    }
}
