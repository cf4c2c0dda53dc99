//! REST client implementation for the Dashboard API.
//!
//! This module provides the [`RestClient`] type: convenience verbs over the
//! dispatcher plus `Link`-header pagination for list endpoints.

use crate::clients::errors::{ApiError, ArgumentError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ApiResponse;
use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// How many pages of a list endpoint to fetch.
///
/// `Limit(n)` stops after `n` pages or when pages run out, whichever comes
/// first. `All` follows the pagination links until none is offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCount {
    /// Follow pagination links until exhausted.
    All,
    /// Fetch at most this many pages (must be at least 1).
    Limit(u32),
}

impl std::str::FromStr for PageCount {
    type Err = ArgumentError;

    /// Parses `"all"` or a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(Self::Limit(n)),
            _ => Err(ArgumentError::InvalidValue {
                parameter: "totalPages",
                value: s.to_string(),
                allowed: &["all", "a positive integer"],
            }),
        }
    }
}

/// Which pagination relation to follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageDirection {
    /// Follow `rel=next` links (`startingAfter` cursors).
    #[default]
    Next,
    /// Follow `rel=prev` links (`endingBefore` cursors).
    Prev,
}

/// REST client for the Dashboard API.
///
/// Provides convenience methods (`get`, `post`, `put`, `delete`) plus
/// [`get_pages`](Self::get_pages) for paginated list endpoints. All calls go
/// through the dispatcher's retry policy; each page fetched during
/// pagination gets its own fresh retry budget.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use meraki_api::{DashboardConfig, ApiKey, RestClient, PageCount, PageDirection};
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef").unwrap())
///     .build()?;
/// let client = RestClient::new(config)?;
///
/// // One GET
/// let response = client.get("/organizations", None).await?;
///
/// // Every page of a list endpoint
/// let orgs = client.get_all("/organizations", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
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
    /// Endpoint methods use this to attach operation metadata; most callers
    /// want the verb conveniences instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn dispatch(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        self.http.request(request).await
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_pairs(query.unwrap_or_default())
            .build()?;
        self.dispatch(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, path).body(body).build()?;
        self.dispatch(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, path).body(body).build()?;
        self.dispatch(request).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.dispatch(request).await
    }

    /// Fetches every page of a list endpoint, concatenated.
    ///
    /// Shorthand for [`get_pages`](Self::get_pages) with [`PageCount::All`]
    /// and [`PageDirection::Next`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, network, and HTTP-level failures.
    pub async fn get_all(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_pairs(query.unwrap_or_default())
            .build()?;
        self.get_pages(request, PageCount::All, PageDirection::Next).await
    }

    /// Fetches one or more pages of a list endpoint and concatenates them.
    ///
    /// Issues the request, then follows the response's `Link` header in the
    /// requested direction: until no further page is offered for
    /// [`PageCount::All`], or until the requested count is reached for
    /// [`PageCount::Limit`], whichever comes first. Page order and in-page
    /// order are preserved; pages fetched backwards are prepended so the
    /// combined sequence stays chronological.
    ///
    /// A response whose body is not a JSON array (an endpoint that is not a
    /// true list endpoint) is returned as-is with no page-following.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Argument`] for `PageCount::Limit(0)`, and
    /// propagates any dispatcher error from the page fetches. Each page
    /// fetch gets its own fresh retry budget.
    pub async fn get_pages(
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
        let first = self.http.request(request).await?;
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
            let page = self.http.request(builder.build()?).await?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_page_count_parses_all_and_integers() {
        assert_eq!("all".parse::<PageCount>().unwrap(), PageCount::All);
        assert_eq!("ALL".parse::<PageCount>().unwrap(), PageCount::All);
        assert_eq!("3".parse::<PageCount>().unwrap(), PageCount::Limit(3));
    }

    #[test]
    fn test_page_count_rejects_zero_and_garbage() {
        assert!(matches!(
            "0".parse::<PageCount>(),
            Err(ArgumentError::InvalidValue { parameter: "totalPages", .. })
        ));
        assert!(matches!(
            "-2".parse::<PageCount>(),
            Err(ArgumentError::InvalidValue { .. })
        ));
        assert!(matches!(
            "several".parse::<PageCount>(),
            Err(ArgumentError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_page_direction_defaults_to_next() {
        assert_eq!(PageDirection::default(), PageDirection::Next);
    }

    #[test]
    fn test_rest_client_construction() {
        let config = DashboardConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(config).unwrap();
        assert_eq!(client.config().api_key().as_ref(), "test-key");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[tokio::test]
    async fn test_get_pages_rejects_zero_limit() {
        let config = DashboardConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(config).unwrap();

        let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
            .build()
            .unwrap();
        let result = client
            .get_pages(request, PageCount::Limit(0), PageDirection::Next)
            .await;

        assert!(matches!(result, Err(ApiError::Argument(_))));
    }
}
