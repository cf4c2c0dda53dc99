//! Integration tests for the endpoint groups.
//!
//! These tests verify that endpoint methods compose the right paths,
//! partition their parameters into query string or JSON body, validate
//! enumerated and mutually-exclusive arguments before any network call,
//! and propagate session results untouched.

use meraki_api::api::networks::{ListNetworksParams, ProductType};
use meraki_api::api::organizations::{
    CreateAdminParams, ListOrganizationsParams, OrgAccess, OrganizationClaim,
};
use meraki_api::{
    ApiError, ApiKey, ArgumentError, BaseUrl, DashboardConfig, PageCount, PageDirection,
    RestClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let config = DashboardConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(config).unwrap()
}

#[tokio::test]
async fn test_list_organizations_hits_the_collection_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "123", "name": "Acme East"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let orgs = client
        .organizations()
        .list(
            &ListOrganizationsParams::default(),
            PageCount::All,
            PageDirection::Next,
        )
        .await
        .unwrap();

    assert_eq!(orgs, json!([{"id": "123", "name": "Acme East"}]));
}

#[tokio::test]
async fn test_invalid_org_access_text_fails_before_any_network_call() {
    let server = MockServer::start().await;
    let _client = client_for(&server);

    // Free-form text is validated when parsed into the enum; the admin
    // creation never gets a chance to dispatch.
    let error = "invalid-value".parse::<OrgAccess>().unwrap_err();

    assert!(matches!(
        error,
        ArgumentError::InvalidValue {
            parameter: "orgAccess",
            ..
        }
    ));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_create_admin_sends_wire_shaped_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations/123/admins"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "name": "Example Admin",
            "orgAccess": "read-only",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "a1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = CreateAdminParams {
        email: "admin@example.com".to_string(),
        name: "Example Admin".to_string(),
        org_access: OrgAccess::ReadOnly,
        tags: None,
        networks: None,
    };

    let admin = client
        .organizations()
        .create_admin("123", &params)
        .await
        .unwrap();
    assert_eq!(admin, json!({"id": "a1"}));
}

#[tokio::test]
async fn test_claim_requires_exactly_one_target() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Both a serial and a license key: rejected up front.
    let both = OrganizationClaim {
        serial: Some("Q2XX-XXXX-XXXX".to_string()),
        license_key: Some("Z2XX-XXXX-XXXX".to_string()),
        ..OrganizationClaim::default()
    };
    let error = client.organizations().claim("123", &both).await.unwrap_err();
    assert!(matches!(
        error,
        ApiError::Argument(ArgumentError::MutuallyExclusive { .. })
    ));

    // No target at all: also rejected.
    let none = OrganizationClaim::default();
    let error = client.organizations().claim("123", &none).await.unwrap_err();
    assert!(matches!(error, ApiError::Argument(_)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_claim_with_single_target_dispatches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations/123/claim"))
        .and(body_json(json!({"serial": "Q2XX-XXXX-XXXX"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"serial": "Q2XX-XXXX-XXXX"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let claim = OrganizationClaim {
        serial: Some("Q2XX-XXXX-XXXX".to_string()),
        ..OrganizationClaim::default()
    };

    client.organizations().claim("123", &claim).await.unwrap();
}

#[tokio::test]
async fn test_network_listing_expands_array_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/123/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "N_1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ListNetworksParams {
        product_types: Some(vec![ProductType::Wireless, ProductType::Switch]),
        per_page: Some(100),
        ..ListNetworksParams::default()
    };

    let networks = client
        .networks()
        .list_for_organization("123", &params, PageCount::Limit(1), PageDirection::Next)
        .await
        .unwrap();
    assert_eq!(networks, json!([{"id": "N_1"}]));

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("productTypes[]".to_string(), "wireless".to_string())));
    assert!(pairs.contains(&("productTypes[]".to_string(), "switch".to_string())));
    assert!(pairs.contains(&("perPage".to_string(), "100".to_string())));
    // No null placeholders for the absent options.
    assert!(!pairs.iter().any(|(k, _)| k == "configTemplateId"));
}

#[tokio::test]
async fn test_device_reboot_posts_without_a_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/devices/Q2XX-XXXX-XXXX/reboot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.devices().reboot("Q2XX-XXXX-XXXX").await.unwrap();
    assert_eq!(result, json!({"success": true}));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_endpoint_errors_propagate_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/networks/N_404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["Network not found"]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.networks().get("N_404").await.unwrap_err();

    match error {
        ApiError::Response(e) => {
            assert_eq!(e.status, 404);
            assert!(e.message.contains("Network not found"));
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}
