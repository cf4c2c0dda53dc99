//! HTTP response types for the Dashboard API SDK.
//!
//! This module provides the [`ApiResponse`] type and related types for
//! parsing and accessing API response data, including the `Link` header
//! pagination metadata list endpoints return.

use std::collections::HashMap;

/// Pagination links parsed from the `Link` header.
///
/// The Dashboard API paginates list endpoints with a `Link` header carrying
/// up to four relations, each an absolute URL whose query string holds an
/// opaque cursor (`startingAfter` for forward paging, `endingBefore` for
/// backward paging):
///
/// ```text
/// <https://api.meraki.com/api/v1/organizations?perPage=3>; rel=first,
/// <https://api.meraki.com/api/v1/organizations?perPage=3&startingAfter=1234>; rel=next
/// ```
///
/// The `rel` token appears both quoted and unquoted in the wild; both forms
/// are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// URL of the first page, if advertised.
    pub first: Option<String>,
    /// URL of the previous page, if one exists.
    pub prev: Option<String>,
    /// URL of the next page, if one exists.
    pub next: Option<String>,
    /// URL of the last page, if advertised.
    pub last: Option<String>,
}

impl PageLinks {
    /// Parses pagination links from a `Link` header value.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let link = link.trim();

            let rel = link.split(';').find_map(|part| {
                let part = part.trim();
                part.strip_prefix("rel=").map(|rel| rel.trim_matches('"'))
            });

            let url = link
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'))
                .filter(|s| !s.is_empty());

            if let (Some(rel), Some(url)) = (rel, url) {
                match rel {
                    "first" => result.first = Some(url.to_string()),
                    "prev" => result.prev = Some(url.to_string()),
                    "next" => result.next = Some(url.to_string()),
                    "last" => result.last = Some(url.to_string()),
                    _ => {}
                }
            }
        }

        result
    }

    /// Returns `true` when no relation was advertised.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }
}

/// Cursor tokens extracted from pagination links.
///
/// Useful for resuming a listing manually: pass `starting_after` (or
/// `ending_before`) back as the query parameter of the same name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCursors {
    /// The `startingAfter` token from the next-page URL.
    pub starting_after: Option<String>,
    /// The `endingBefore` token from the previous-page URL.
    pub ending_before: Option<String>,
}

/// Extracts and percent-decodes a query parameter from a URL.
fn query_param(url: &str, name: &str) -> Option<String> {
    let query_start = url.find('?')?;
    let query = &url[query_start + 1..];

    for param in query.split('&') {
        let mut parts = param.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == name {
                return Some(
                    urlencoding::decode(value)
                        .map_or_else(|_| value.to_string(), |decoded| decoded.into_owned()),
                );
            }
        }
    }

    None
}

/// An HTTP response from the Dashboard API.
///
/// Contains the response status code, headers, parsed JSON body, and the
/// pagination metadata parsed from the `Link` header. An empty body (e.g. a
/// 204 from a delete) parses to JSON null.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `Value::Null` when the body was empty.
    pub body: serde_json::Value,
    /// Pagination links (from the `Link` header).
    pub page_links: PageLinks,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<f64>,
}

impl ApiResponse {
    /// Creates a new `ApiResponse` with automatic header parsing.
    ///
    /// The `Link` and `Retry-After` headers are parsed into
    /// [`PageLinks`] and `retry_after` respectively; header names are
    /// expected lowercase.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let page_links = headers
            .get("link")
            .and_then(|values| values.first())
            .map_or_else(PageLinks::default, |link| PageLinks::parse_link_header(link));

        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            status,
            headers,
            body,
            page_links,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the URL of the next page, if one exists.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.page_links.next.as_deref()
    }

    /// Returns the URL of the previous page, if one exists.
    #[must_use]
    pub fn prev_url(&self) -> Option<&str> {
        self.page_links.prev.as_deref()
    }

    /// Returns the cursor tokens extracted from the pagination links.
    #[must_use]
    pub fn cursors(&self) -> PageCursors {
        PageCursors {
            starting_after: self
                .next_url()
                .and_then(|url| query_param(url, "startingAfter")),
            ending_before: self
                .prev_url()
                .and_then(|url| query_param(url, "endingBefore")),
        }
    }
}
