//! Generated-style endpoint groups for the Dashboard API.
//!
//! Each group is a thin accessor over the shared [`RestClient`]: a method
//! per REST operation that composes a resource path, partitions its typed
//! parameters into query string or JSON body, and calls exactly one session
//! verb. No group recovers from a session error; results and errors
//! propagate untouched.
//!
//! Parameters restricted to an enumerated set of values are Rust enums, so
//! an invalid value is unrepresentable once constructed; parsing free-form
//! text into one of these enums rejects anything outside the set before any
//! network call.
//!
//! # Example
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
//! let orgs = client
//!     .organizations()
//!     .list(&ListOrganizationsParams::default(), PageCount::All, PageDirection::Next)
//!     .await?;
//! ```

pub mod devices;
pub mod networks;
pub mod organizations;

use serde::Serialize;

use crate::clients::errors::{ApiError, ArgumentError, InvalidRequestError};

/// Serializes a params struct into ordered query pairs.
///
/// `None` fields are skipped entirely (no null placeholders reach the wire),
/// scalars stringify, and arrays expand into repeated `key[]` entries the
/// way the API expects (`productTypes[]=wireless&productTypes[]=switch`).
pub(crate) fn to_query_pairs<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params).map_err(|e| {
        ApiError::InvalidRequest(InvalidRequestError::Serialization {
            message: e.to_string(),
        })
    })?;

    let mut pairs = Vec::new();

    if let serde_json::Value::Object(map) = value {
        for (key, val) in map {
            match val {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => pairs.push((key, s)),
                serde_json::Value::Number(n) => pairs.push((key, n.to_string())),
                serde_json::Value::Bool(b) => pairs.push((key, b.to_string())),
                serde_json::Value::Array(items) => {
                    let key = format!("{key}[]");
                    for item in items {
                        match item {
                            serde_json::Value::String(s) => pairs.push((key.clone(), s)),
                            other => pairs.push((key.clone(), other.to_string())),
                        }
                    }
                }
                other @ serde_json::Value::Object(_) => pairs.push((key, other.to_string())),
            }
        }
    }

    Ok(pairs)
}

/// Serializes a params struct into a JSON body.
pub(crate) fn to_body<T: Serialize>(params: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(params).map_err(|e| {
        ApiError::InvalidRequest(InvalidRequestError::Serialization {
            message: e.to_string(),
        })
    })
}

/// Validates that exactly one of a mutually-exclusive argument group is set.
pub(crate) fn require_exactly_one(
    parameters: &'static [&'static str],
    set: &[bool],
) -> Result<(), ArgumentError> {
    let count = set.iter().filter(|present| **present).count();
    if count == 1 {
        Ok(())
    } else {
        Err(ArgumentError::MutuallyExclusive { parameters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct SampleParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        per_page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        starting_after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        product_types: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        confirmed: Option<bool>,
    }

    #[test]
    fn test_query_pairs_skip_absent_fields() {
        let pairs = to_query_pairs(&SampleParams::default()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_query_pairs_stringify_scalars() {
        let params = SampleParams {
            per_page: Some(100),
            starting_after: Some("L_1234".to_string()),
            confirmed: Some(true),
            ..SampleParams::default()
        };

        let pairs = to_query_pairs(&params).unwrap();
        assert!(pairs.contains(&("perPage".to_string(), "100".to_string())));
        assert!(pairs.contains(&("startingAfter".to_string(), "L_1234".to_string())));
        assert!(pairs.contains(&("confirmed".to_string(), "true".to_string())));
    }

    #[test]
    fn test_query_pairs_expand_arrays_as_repeated_params() {
        let params = SampleParams {
            product_types: Some(vec!["wireless".to_string(), "switch".to_string()]),
            ..SampleParams::default()
        };

        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("productTypes[]".to_string(), "wireless".to_string()),
                ("productTypes[]".to_string(), "switch".to_string()),
            ]
        );
    }

    #[test]
    fn test_body_serialization_skips_absent_fields() {
        let params = SampleParams {
            per_page: Some(10),
            ..SampleParams::default()
        };
        let body = to_body(&params).unwrap();
        assert_eq!(body, serde_json::json!({"perPage": 10}));
        assert!(body.get("startingAfter").is_none());
    }

    #[test]
    fn test_require_exactly_one() {
        const GROUP: &[&str] = &["order", "serial", "licenseKey"];

        assert!(require_exactly_one(GROUP, &[true, false, false]).is_ok());
        assert!(matches!(
            require_exactly_one(GROUP, &[false, false, false]),
            Err(ArgumentError::MutuallyExclusive { .. })
        ));
        assert!(matches!(
            require_exactly_one(GROUP, &[true, true, false]),
            Err(ArgumentError::MutuallyExclusive { .. })
        ));
    }
}
