//! Blocking (synchronous) session variant.
//!
//! Structurally identical to the async session: the same URL construction,
//! headers, retry policy, simulate mode, pagination and error surface, with
//! each call blocking the calling thread instead of suspending a task. There
//! is no concurrency limiter; one call occupies one thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_api::{DashboardConfig, ApiKey};
//! use meraki_api::blocking::RestClient;
//!
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef").unwrap())
//!     .build()?;
//! let client = RestClient::new(config)?;
//!
//! let orgs = client.get_all("/organizations", None)?;
//! ```

mod client;
mod http_client;

pub mod api;

pub use client::RestClient;
pub use http_client::HttpClient;
