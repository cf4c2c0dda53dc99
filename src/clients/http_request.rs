//! HTTP request types for the Dashboard API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Dashboard API.

use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods supported by the Dashboard API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that modify remote state.
    ///
    /// Write methods are the ones short-circuited by simulate (dry-run) mode.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to the Dashboard API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. Query parameters are an ordered list of pairs so a key may
/// repeat, which is how the API expects array parameters
/// (`productTypes[]=wireless&productTypes[]=switch`).
///
/// The `path` is normally relative to the session's base URL; a path that
/// already carries a scheme is used verbatim, which is how the pager follows
/// the absolute URLs found in `Link` response headers.
///
/// # Example
///
/// ```rust
/// use meraki_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/organizations")
///     .query_param("perPage", "1000")
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/organizations")
///     .body(json!({"name": "Acme East"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path, relative to the base URL, or an absolute URL.
    pub path: String,
    /// Ordered query parameters; keys may repeat for array values.
    pub query: Vec<(String, String)>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// The generated operation name, used only for diagnostics.
    pub operation: Option<&'static str>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] when the path is empty.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.path.is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }
        Ok(())
    }

    /// Returns `true` when the path is an absolute URL.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    operation: Option<&'static str>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            operation: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends a list of query parameters, preserving order.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Records the generated operation name for diagnostics.
    #[must_use]
    pub const fn operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
            operation: self.operation,
        };
        request.verify()?;
        Ok(request)
    }
}
