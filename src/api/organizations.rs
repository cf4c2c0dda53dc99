//! Organizations endpoint group.
//!
//! Operations on organizations: listing, CRUD, device/license claiming,
//! dashboard administrators, and action batches.

use serde::Serialize;

use crate::api::{require_exactly_one, to_body, to_query_pairs};
use crate::clients::errors::{ApiError, ArgumentError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::rest::{PageCount, PageDirection, RestClient};

/// Access level an administrator has over an organization.
///
/// Parsing free-form text rejects anything outside the allowed set before
/// any network call is made.
///
/// # Example
///
/// ```rust
/// use meraki_api::api::organizations::OrgAccess;
///
/// let access: OrgAccess = "read-only".parse().unwrap();
/// assert_eq!(access, OrgAccess::ReadOnly);
/// assert!("superuser".parse::<OrgAccess>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrgAccess {
    /// Full organization access.
    Full,
    /// Read-only organization access.
    ReadOnly,
    /// No organization-wide access (per-network grants only).
    None,
}

impl OrgAccess {
    const ALLOWED: &'static [&'static str] = &["full", "read-only", "none"];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ReadOnly => "read-only",
            Self::None => "none",
        }
    }
}

impl std::str::FromStr for OrgAccess {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "read-only" => Ok(Self::ReadOnly),
            "none" => Ok(Self::None),
            other => Err(ArgumentError::InvalidValue {
                parameter: "orgAccess",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// How claimed licenses are applied to the organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LicenseMode {
    /// Add the license's device counts to the current licensing.
    AddDevices,
    /// Push back the expiration date using the new license.
    Renew,
}

impl LicenseMode {
    const ALLOWED: &'static [&'static str] = &["addDevices", "renew"];
}

impl std::str::FromStr for LicenseMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addDevices" => Ok(Self::AddDevices),
            "renew" => Ok(Self::Renew),
            other => Err(ArgumentError::InvalidValue {
                parameter: "licenseMode",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Query parameters for listing organizations.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationsParams {
    /// Entries per page (3-9000; the API default is 9000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Resume listing after this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Resume listing before this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Body parameters for creating an organization.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationParams {
    /// The name of the new organization.
    pub name: String,
}

/// Body parameters for updating an organization.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationParams {
    /// The new name of the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Claim target for [`Organizations::claim`].
///
/// Exactly one of `order`, `serial`, or `license_key` must be set; the
/// claim is rejected before any network call otherwise.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationClaim {
    /// An order number to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// A device serial to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// A license key to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    /// How a claimed license is applied. Only meaningful with `license_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_mode: Option<LicenseMode>,
}

/// A per-tag access grant for an administrator.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTag {
    /// The tag the grant applies to.
    pub tag: String,
    /// The access level for that tag.
    pub access: String,
}

/// A per-network access grant for an administrator.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNetwork {
    /// The network the grant applies to.
    pub id: String,
    /// The access level for that network.
    pub access: String,
}

/// Body parameters for creating a dashboard administrator.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminParams {
    /// The email of the new administrator.
    pub email: String,
    /// The name of the new administrator.
    pub name: String,
    /// The organization-wide access level.
    pub org_access: OrgAccess,
    /// Per-tag access grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<AdminTag>>,
    /// Per-network access grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<AdminNetwork>>,
}

/// One action inside an action batch.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAction {
    /// The resource path the action targets, e.g. `/devices/QXXX/switch/ports/3`.
    pub resource: String,
    /// The operation to apply, e.g. `update`.
    pub operation: String,
    /// The operation's body parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Body parameters for creating an action batch.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionBatchParams {
    /// Whether the batch is committed for execution (defaults to false:
    /// the batch is staged until confirmed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    /// Whether the batch runs synchronously (at most 20 actions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
    /// The actions to apply as one atomic set.
    pub actions: Vec<BatchAction>,
}

/// Operations on organizations.
///
/// Obtained from [`RestClient::organizations`].
#[derive(Clone, Copy, Debug)]
pub struct Organizations<'a> {
    client: &'a RestClient,
}

impl RestClient {
    /// Returns the organizations endpoint group.
    #[must_use]
    pub const fn organizations(&self) -> Organizations<'_> {
        Organizations { client: self }
    }
}

impl Organizations<'_> {
    /// List the organizations that the user has privileges on.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn list(
        &self,
        params: &ListOrganizationsParams,
        total_pages: PageCount,
        direction: PageDirection,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
            .query_pairs(to_query_pairs(params)?)
            .operation("getOrganizations")
            .build()?;
        self.client.get_pages(request, total_pages, direction).await
    }

    /// Return an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn get(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}"),
        )
        .operation("getOrganization")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Create a new organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn create(
        &self,
        params: &CreateOrganizationParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/organizations")
            .body(to_body(params)?)
            .operation("createOrganization")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Update an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn update(
        &self,
        organization_id: &str,
        params: &UpdateOrganizationParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Put,
            format!("/organizations/{organization_id}"),
        )
        .body(to_body(params)?)
        .operation("updateOrganization")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Delete an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn delete(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/organizations/{organization_id}"),
        )
        .operation("deleteOrganization")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Claim an order, device, or license into an organization.
    ///
    /// Exactly one of the claim's `order`, `serial`, or `license_key` must
    /// be set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Argument`] before any network call when the
    /// mutually-exclusive rule is violated; otherwise propagates any
    /// session error.
    pub async fn claim(
        &self,
        organization_id: &str,
        claim: &OrganizationClaim,
    ) -> Result<serde_json::Value, ApiError> {
        require_exactly_one(
            &["order", "serial", "licenseKey"],
            &[
                claim.order.is_some(),
                claim.serial.is_some(),
                claim.license_key.is_some(),
            ],
        )?;

        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/organizations/{organization_id}/claim"),
        )
        .body(to_body(claim)?)
        .operation("claimIntoOrganization")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// List the dashboard administrators in an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn list_admins(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}/admins"),
        )
        .operation("getOrganizationAdmins")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Create a new dashboard administrator.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn create_admin(
        &self,
        organization_id: &str,
        params: &CreateAdminParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/organizations/{organization_id}/admins"),
        )
        .body(to_body(params)?)
        .operation("createOrganizationAdmin")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Create an action batch.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn create_action_batch(
        &self,
        organization_id: &str,
        params: &CreateActionBatchParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/organizations/{organization_id}/actionBatches"),
        )
        .body(to_body(params)?)
        .operation("createOrganizationActionBatch")
        .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_access_parses_allowed_values() {
        assert_eq!("full".parse::<OrgAccess>().unwrap(), OrgAccess::Full);
        assert_eq!("read-only".parse::<OrgAccess>().unwrap(), OrgAccess::ReadOnly);
        assert_eq!("none".parse::<OrgAccess>().unwrap(), OrgAccess::None);
    }

    #[test]
    fn test_org_access_rejects_unknown_values() {
        let err = "superuser".parse::<OrgAccess>().unwrap_err();
        assert!(matches!(
            err,
            ArgumentError::InvalidValue { parameter: "orgAccess", .. }
        ));
    }

    #[test]
    fn test_org_access_serializes_to_wire_form() {
        assert_eq!(
            serde_json::to_value(OrgAccess::ReadOnly).unwrap(),
            serde_json::json!("read-only")
        );
        assert_eq!(OrgAccess::ReadOnly.as_str(), "read-only");
    }

    #[test]
    fn test_license_mode_parses_allowed_values() {
        assert_eq!(
            "addDevices".parse::<LicenseMode>().unwrap(),
            LicenseMode::AddDevices
        );
        assert!("stack".parse::<LicenseMode>().is_err());
    }

    #[test]
    fn test_create_admin_params_serialize_without_absent_fields() {
        let params = CreateAdminParams {
            email: "admin@example.com".to_string(),
            name: "Example Admin".to_string(),
            org_access: OrgAccess::Full,
            tags: None,
            networks: None,
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "email": "admin@example.com",
                "name": "Example Admin",
                "orgAccess": "full",
            })
        );
    }

    #[test]
    fn test_claim_serializes_camel_case() {
        let claim = OrganizationClaim {
            license_key: Some("Z2XX-XXXX-XXXX".to_string()),
            license_mode: Some(LicenseMode::Renew),
            ..OrganizationClaim::default()
        };

        let body = serde_json::to_value(&claim).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "licenseKey": "Z2XX-XXXX-XXXX",
                "licenseMode": "renew",
            })
        );
    }

    #[test]
    fn test_action_batch_params_serialize() {
        let params = CreateActionBatchParams {
            confirmed: Some(true),
            synchronous: None,
            actions: vec![BatchAction {
                resource: "/devices/QXXX-XXXX-XXXX/switch/ports/3".to_string(),
                operation: "update".to_string(),
                body: Some(serde_json::json!({"enabled": true})),
            }],
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["confirmed"], serde_json::json!(true));
        assert!(body.get("synchronous").is_none());
        assert_eq!(body["actions"][0]["operation"], serde_json::json!("update"));
    }
}
