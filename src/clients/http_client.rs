//! Async HTTP client for Dashboard API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Dashboard API with automatic retry handling and a
//! bounded-concurrency limiter.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;

use crate::clients::errors::{ApiError, ApiResponseError, MaxRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::ApiResponse;
use crate::clients::transport;
use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// Async HTTP client for making requests to the Dashboard API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including the API key and User-Agent
/// - Automatic retry logic for 429 and, when enabled, other failures
/// - Simulate (dry-run) mode for write operations
/// - A counting semaphore bounding simultaneously in-flight requests
///
/// Each retry budget is per logical request: a paginated listing issues one
/// dispatcher call per page, each with a fresh budget.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// Sleeping between retries suspends only the calling task; other concurrent
/// requests are unaffected.
///
/// # Example
///
/// ```rust,ignore
/// use meraki_api::{DashboardConfig, ApiKey};
/// use meraki_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef").unwrap())
///     .build()?;
/// let client = HttpClient::new(config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable session configuration.
    config: DashboardConfig,
    /// Bounds the number of simultaneously in-flight requests.
    limiter: Arc<Semaphore>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpTransport`] when the configured TLS
    /// certificate or proxy cannot be applied to the transport.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        let client = transport::configure_async_client(&config)?
            .build()
            .map_err(|e| ConfigError::HttpTransport {
                message: e.to_string(),
            })?;
        let limiter = Arc::new(Semaphore::new(config.maximum_concurrent_requests()));

        Ok(Self {
            client,
            config,
            limiter,
        })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Sends a request to the Dashboard API.
    ///
    /// Handles simulate mode, URL construction, header injection, response
    /// parsing, and the retry policy. On a 2xx response the parsed JSON body
    /// is returned inside an [`ApiResponse`]; an empty body parses to null.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be completed (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The retry budget is exhausted (`MaxRetries`)
    ///
    /// # Panics
    ///
    /// Panics if the internal concurrency limiter has been closed, which
    /// cannot happen during normal operation.
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        if self.config.simulate() && request.method.is_write() {
            tracing::info!(
                method = %request.method,
                path = %request.path,
                "simulate mode: skipping dispatch"
            );
            return Ok(ApiResponse::new(202, HashMap::new(), serde_json::Value::Null));
        }

        let url = transport::build_url(&self.config, &request);
        let mut retries_used: u32 = 0;

        loop {
            match self.dispatch_once(&request, &url).await {
                Ok(response) if response.is_ok() => return Ok(response),
                Ok(response) => {
                    if let Some(wait) = transport::retry_wait(&self.config, &response) {
                        if retries_used < self.config.maximum_retries() {
                            retries_used += 1;
                            tracing::warn!(
                                method = %request.method,
                                path = %request.path,
                                status = response.status,
                                retry = retries_used,
                                wait_ms = wait.as_millis() as u64,
                                "retrying failed request"
                            );
                            tokio::time::sleep(wait).await;
                            continue;
                        }
                    }

                    let message = transport::serialize_error(&response);
                    if retries_used > 0 {
                        return Err(MaxRetriesExceededError {
                            status: response.status,
                            retries: retries_used,
                            message,
                        }
                        .into());
                    }
                    return Err(ApiResponseError {
                        status: response.status,
                        message,
                        operation: request.operation,
                    }
                    .into());
                }
                Err(error) => {
                    if self.config.retry_on_timeout()
                        && transport::is_retryable_network_error(&error)
                        && retries_used < self.config.maximum_retries()
                    {
                        retries_used += 1;
                        tracing::warn!(
                            method = %request.method,
                            path = %request.path,
                            retry = retries_used,
                            "retrying after network error: {error}"
                        );
                        tokio::time::sleep(self.config.other_error_retry_wait()).await;
                        continue;
                    }
                    return Err(ApiError::Network(error));
                }
            }
        }
    }

    /// Performs a single network attempt.
    ///
    /// Holds a concurrency permit only for the duration of the attempt, so
    /// a task sleeping between retries does not starve other requests.
    async fn dispatch_once(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> Result<ApiResponse, reqwest::Error> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .expect("concurrency limiter is never closed");

        let mut builder = match request.method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(url),
        };

        builder = builder
            .header(transport::API_KEY_HEADER, self.config.api_key().as_ref())
            .header("User-Agent", transport::user_agent(&self.config))
            .header("Accept", "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let res = builder.send().await?;

        let status = res.status().as_u16();
        let headers = transport::parse_response_headers(res.headers());
        let text = res.text().await.unwrap_or_default();
        let body = transport::parse_body(&text);

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            operation = request.operation.unwrap_or("custom"),
            status,
            latency_ms = started.elapsed().as_millis() as u64,
            "dispatched request"
        );

        Ok(ApiResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn test_config() -> DashboardConfig {
        DashboardConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new(test_config()).unwrap();
        assert_eq!(client.config().api_key().as_ref(), "test-key");
        assert_eq!(client.config().maximum_concurrent_requests(), 5);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_dispatch() {
        let client = HttpClient::new(test_config()).unwrap();
        let request = HttpRequest {
            method: crate::clients::http_request::HttpMethod::Get,
            path: String::new(),
            query: Vec::new(),
            body: None,
            operation: None,
        };

        let result = client.request(request).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_simulate_short_circuits_writes() {
        let config = DashboardConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .simulate(true)
            .build()
            .unwrap();
        let client = HttpClient::new(config).unwrap();

        let request = HttpRequest::builder(
            crate::clients::http_request::HttpMethod::Delete,
            "/organizations/123",
        )
        .build()
        .unwrap();

        // No server is listening anywhere; success proves nothing was sent.
        let response = client.request(request).await.unwrap();
        assert_eq!(response.status, 202);
        assert!(response.body.is_null());
    }
}
