//! HTTP client types for Dashboard API communication.
//!
//! This module provides the foundational HTTP session layer for making
//! authenticated requests to the Dashboard API. It handles request/response
//! processing, retry logic, pagination metadata parsing, and simulate
//! (dry-run) mode.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async dispatcher with retry and bounded concurrency
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ApiResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level REST client with pagination
//! - [`blocking`]: The synchronous session variant
//!
//! # Retry Behavior
//!
//! The dispatcher retries transient failures under the session
//! configuration:
//!
//! - **429 (Rate Limited)**: retried while `wait_on_rate_limit` is set,
//!   sleeping the server's `Retry-After` value when present, else the
//!   configured wait
//! - **Other 4xx/5xx**: retried only when `retry_on_other_errors` is set
//! - **Network errors/timeouts**: retried only when `retry_on_timeout` is set
//!
//! All retries draw from one `maximum_retries` budget per logical request;
//! exhausting it surfaces the final failure as
//! [`MaxRetriesExceededError`].

pub(crate) mod errors;
mod http_client;
pub(crate) mod http_request;
mod http_response;
mod transport;

pub mod blocking;
pub mod rest;

pub use errors::{
    ApiError, ApiResponseError, ArgumentError, InvalidRequestError, MaxRetriesExceededError,
};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiResponse, PageCursors, PageLinks};
pub use transport::SDK_VERSION;

// Re-export REST client types at the clients module level
pub use rest::{PageCount, PageDirection, RestClient};
