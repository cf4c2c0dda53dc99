//! # Meraki Dashboard API Rust SDK
//!
//! A Rust SDK for the Cisco Meraki Dashboard API, providing type-safe
//! configuration, a rate-limit-aware HTTP session, cursor pagination, and
//! endpoint groups for common dashboard operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DashboardConfig`] and [`DashboardConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An async HTTP session with automatic 429 retry handling, a bounded
//!   concurrency limiter, and simulate (dry-run) mode
//! - `Link`-header cursor pagination with bounded and unbounded page counts
//! - A structurally identical blocking session in [`blocking`]
//! - Endpoint groups ([`api::organizations`], [`api::networks`],
//!   [`api::devices`]) over the shared session
//!
//! ## Quick Start
//!
//! ```rust
//! use meraki_api::{DashboardConfig, ApiKey};
//!
//! // Create configuration using the builder pattern
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef").unwrap())
//!     .wait_on_rate_limit(true)
//!     .maximum_retries(4)
//!     .build()
//!     .unwrap();
//! ```
//!
//! The API key may also come from the `MERAKI_DASHBOARD_API_KEY` environment
//! variable, in which case `.api_key(...)` can be omitted.
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use meraki_api::{DashboardConfig, ApiKey, RestClient, PageCount, PageDirection};
//! use meraki_api::api::organizations::ListOrganizationsParams;
//!
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef").unwrap())
//!     .build()?;
//! let client = RestClient::new(config)?;
//!
//! // Endpoint groups
//! let orgs = client
//!     .organizations()
//!     .list(&ListOrganizationsParams::default(), PageCount::All, PageDirection::Next)
//!     .await?;
//!
//! // Or the raw session surface
//! let response = client.get("/organizations", None).await?;
//! println!("{}", response.body);
//! ```
//!
//! ## Pagination
//!
//! List endpoints return pages linked through the `Link` response header,
//! whose relations carry opaque `startingAfter`/`endingBefore` cursors.
//! [`RestClient::get_pages`] follows those links for you — forward or
//! backward, a bounded number of pages or all of them — and concatenates the
//! results in order. Each page fetch gets its own fresh retry budget.
//!
//! ## Dry Runs
//!
//! With `.simulate(true)` every POST/PUT/DELETE short-circuits before the
//! network and returns a success-shaped placeholder, while GET requests
//! still run. Useful for rehearsing configuration changes.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and enumerated parameters validate
//!   on construction, before any network call
//! - **Thread-safe**: All session types are `Send + Sync`
//! - **Async-first**: Designed for the Tokio runtime, with a blocking twin
//! - **Typed errors**: Every failure surfaces as a typed error; nothing is
//!   printed and swallowed

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, DashboardConfig, DashboardConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP session types
pub use clients::{
    ApiError, ApiResponse, ApiResponseError, ArgumentError, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, InvalidRequestError, MaxRetriesExceededError, PageCount, PageCursors,
    PageDirection, PageLinks, RestClient, SDK_VERSION,
};

// The blocking session variant, mirroring the async surface
pub use clients::blocking;
