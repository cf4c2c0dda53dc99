//! Blocking HTTP client for Dashboard API communication.
//!
//! The synchronous twin of [`crate::clients::HttpClient`]: the same retry
//! policy, simulate mode and error surface, with `reqwest::blocking` doing
//! the I/O and `std::thread::sleep` doing the waiting.

use std::collections::HashMap;
use std::time::Instant;

use crate::clients::errors::{ApiError, ApiResponseError, MaxRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::ApiResponse;
use crate::clients::transport;
use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// Blocking HTTP client for making requests to the Dashboard API.
///
/// Each call performs one blocking network round trip on the calling thread.
/// There is no shared mutable state across calls other than the read-only
/// configuration; the underlying connection pool's thread-safety is
/// reqwest's responsibility.
///
/// Do not use this client from inside an async runtime; use
/// [`crate::clients::HttpClient`] there instead.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal blocking reqwest client.
    client: reqwest::blocking::Client,
    /// Immutable session configuration.
    config: DashboardConfig,
}

impl HttpClient {
    /// Creates a new blocking HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpTransport`] when the configured TLS
    /// certificate or proxy cannot be applied to the transport.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        let client = transport::configure_blocking_client(&config)?
            .build()
            .map_err(|e| ConfigError::HttpTransport {
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Sends a request to the Dashboard API, blocking until it completes.
    ///
    /// Semantics match the async dispatcher: simulate mode short-circuits
    /// writes, 2xx responses return the parsed JSON body, failures are
    /// retried under the configured policy with a fresh budget per call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be completed (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The retry budget is exhausted (`MaxRetries`)
    pub fn request(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
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
            match self.dispatch_once(&request, &url) {
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
                            std::thread::sleep(wait);
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
                        std::thread::sleep(self.config.other_error_retry_wait());
                        continue;
                    }
                    return Err(ApiError::Network(error));
                }
            }
        }
    }

    /// Performs a single network attempt.
    fn dispatch_once(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> Result<ApiResponse, reqwest::Error> {
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
        let res = builder.send()?;

        let status = res.status().as_u16();
        let headers = transport::parse_response_headers(res.headers());
        let text = res.text().unwrap_or_default();
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
    use crate::clients::http_request::HttpMethod;
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
    }

    #[test]
    fn test_simulate_short_circuits_writes() {
        let config = DashboardConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .simulate(true)
            .build()
            .unwrap();
        let client = HttpClient::new(config).unwrap();

        let request = HttpRequest::builder(HttpMethod::Post, "/organizations")
            .body(serde_json::json!({"name": "Acme East"}))
            .build()
            .unwrap();

        // No server is listening anywhere; success proves nothing was sent.
        let response = client.request(request).unwrap();
        assert_eq!(response.status, 202);
        assert!(response.body.is_null());
    }
}
