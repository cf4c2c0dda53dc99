//! Blocking REST client implementation for the Dashboard API.

use crate::clients::blocking::http_client::HttpClient;
use crate::clients::errors::{ApiError, ArgumentError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ApiResponse;
use crate::clients::rest::{PageCount, PageDirection};
use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// Blocking REST client for the Dashboard API.
///
/// The synchronous twin of [`crate::RestClient`], with identical verb,
/// pagination and error semantics. Each call blocks the calling thread.
///
/// # Example
///
/// ```rust,ignore
/// use meraki_api::{DashboardConfig, ApiKey, PageCount, PageDirection};
/// use meraki_api::blocking::RestClient;
/// use meraki_api::clients::{HttpRequest, HttpMethod};
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef").unwrap())
///     .build()?;
/// let client = RestClient::new(config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/organizations").build()?;
/// let orgs = client.get_pages(request, PageCount::Limit(3), PageDirection::Next)?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal blocking HTTP client.
    http: HttpClient,
}

impl RestClient {
    /// Creates a new blocking REST client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpTransport`] when the transport cannot be
    /// constructed from the configuration.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        self.http.config()
    }

    /// Sends a prepared request through the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn dispatch(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        self.http.request(request)
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_pairs(query.unwrap_or_default())
            .build()?;
        self.dispatch(request)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn post(&self, path: &str, body: serde_json::Value) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, path).body(body).build()?;
        self.dispatch(request)
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn put(&self, path: &str, body: serde_json::Value) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, path).body(body).build()?;
        self.dispatch(request)
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.dispatch(request)
    }

    /// Fetches every page of a list endpoint, concatenated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub fn get_all(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_pairs(query.unwrap_or_default())
            .build()?;
        self.get_pages(request, PageCount::All, PageDirection::Next)
    }

    /// Fetches one or more pages of a list endpoint and concatenates them.
    ///
    /// Same contract as the async [`crate::RestClient::get_pages`]: bounded
    /// or unbounded page counts, forward or backward traversal, non-array
    /// bodies returned as-is, and a fresh retry budget per page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Argument`] for `PageCount::Limit(0)`, and
    /// propagates any dispatcher error from the page fetches.
    pub fn get_pages(
        &self,
        request: HttpRequest,
        total_pages: PageCount,
        direction: PageDirection,
    ) -> Result<serde_json::Value, ApiError> {
        if total_pages == PageCount::Limit(0) {
            return Err(ArgumentError::InvalidValue {
                parameter: "totalPages",
                value: "0".to_string(),
                allowed: &["all", "a positive integer"],
            }
            .into());
        }

        let operation = request.operation;
        let first = self.http.request(request)?;
        let links = first.page_links;

        let mut items = match first.body {
            serde_json::Value::Array(items) => items,
            other => return Ok(other),
        };

        let mut remaining = match total_pages {
            PageCount::All => None,
            PageCount::Limit(n) => Some(n - 1),
        };
        let mut link = match direction {
            PageDirection::Next => links.next,
            PageDirection::Prev => links.prev,
        };

        while let Some(url) = link {
            if remaining == Some(0) {
                break;
            }

            let mut builder = HttpRequest::builder(HttpMethod::Get, url);
            if let Some(op) = operation {
                builder = builder.operation(op);
            }
            let page = self.http.request(builder.build()?)?;
            let page_links = page.page_links;

            match page.body {
                serde_json::Value::Array(mut chunk) => match direction {
                    PageDirection::Next => items.append(&mut chunk),
                    PageDirection::Prev => {
                        chunk.append(&mut items);
                        items = chunk;
                    }
                },
                _ => break,
            }

            if let Some(r) = remaining.as_mut() {
                *r -= 1;
            }
            link = match direction {
                PageDirection::Next => page_links.next,
                PageDirection::Prev => page_links.prev,
            };
        }

        Ok(serde_json::Value::Array(items))
    }
}
