//! Blocking endpoint groups.
//!
//! The synchronous mirror of [`crate::api`], sharing the same parameter
//! types and wire behavior. The organizations group is mirrored here; the
//! remaining groups follow the same mechanical pattern over
//! [`RestClient`](super::RestClient)'s verbs.

use crate::api::organizations::{
    CreateActionBatchParams, CreateAdminParams, CreateOrganizationParams, ListOrganizationsParams,
    OrganizationClaim, UpdateOrganizationParams,
};
use crate::api::{require_exactly_one, to_body, to_query_pairs};
use crate::clients::blocking::RestClient;
use crate::clients::errors::ApiError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::rest::{PageCount, PageDirection};

/// Operations on organizations, blocking variant.
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
    pub fn list(
        &self,
        params: &ListOrganizationsParams,
        total_pages: PageCount,
        direction: PageDirection,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
            .query_pairs(to_query_pairs(params)?)
            .operation("getOrganizations")
            .build()?;
        self.client.get_pages(request, total_pages, direction)
    }

    /// Return an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn get(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}"),
        )
        .operation("getOrganization")
        .build()?;
        Ok(self.client.dispatch(request)?.body)
    }

    /// Create a new organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn create(&self, params: &CreateOrganizationParams) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/organizations")
            .body(to_body(params)?)
            .operation("createOrganization")
            .build()?;
        Ok(self.client.dispatch(request)?.body)
    }

    /// Update an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn update(
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
        Ok(self.client.dispatch(request)?.body)
    }

    /// Delete an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn delete(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/organizations/{organization_id}"),
        )
        .operation("deleteOrganization")
        .build()?;
        Ok(self.client.dispatch(request)?.body)
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
    pub fn claim(
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
        Ok(self.client.dispatch(request)?.body)
    }

    /// List the dashboard administrators in an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn list_admins(&self, organization_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}/admins"),
        )
        .operation("getOrganizationAdmins")
        .build()?;
        Ok(self.client.dispatch(request)?.body)
    }

    /// Create a new dashboard administrator.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn create_admin(
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
        Ok(self.client.dispatch(request)?.body)
    }

    /// Create an action batch.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub fn create_action_batch(
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
        Ok(self.client.dispatch(request)?.body)
    }
}
