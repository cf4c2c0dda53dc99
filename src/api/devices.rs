//! Devices endpoint group.
//!
//! Operations on devices: attribute reads and updates, reboot, LED blink,
//! and the organization-wide device inventory listing.

use serde::Serialize;

use crate::api::{to_body, to_query_pairs};
use crate::clients::errors::ApiError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::rest::{PageCount, PageDirection, RestClient};

/// Body parameters for updating a device's attributes.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceParams {
    /// The name of the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Latitude of the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude of the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Street address of the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the map marker moves to the new address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_map_marker: Option<bool>,
}

/// Body parameters for blinking a device's LEDs.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlinkLedsParams {
    /// Blink duration in seconds (5-120).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Blink period in milliseconds (100-1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    /// Blink duty cycle as a percentage (10-90).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty: Option<u32>,
}

/// Query parameters for listing the devices in an organization.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationDevicesParams {
    /// Filter by configuration status updated since this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_updated_after: Option<String>,
    /// Filter by network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_ids: Option<Vec<String>>,
    /// Filter by model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    /// Filter by tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Entries per page (3-1000; the API default is 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Resume listing after this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Resume listing before this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Operations on devices.
///
/// Obtained from [`RestClient::devices`].
#[derive(Clone, Copy, Debug)]
pub struct Devices<'a> {
    client: &'a RestClient,
}

impl RestClient {
    /// Returns the devices endpoint group.
    #[must_use]
    pub const fn devices(&self) -> Devices<'_> {
        Devices { client: self }
    }
}

impl Devices<'_> {
    /// Return a single device.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn get(&self, serial: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/devices/{serial}"))
            .operation("getDevice")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Update the attributes of a device.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn update(
        &self,
        serial: &str,
        params: &UpdateDeviceParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("/devices/{serial}"))
            .body(to_body(params)?)
            .operation("updateDevice")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Reboot a device.
    ///
    /// A POST with an empty body; the response reports whether the reboot
    /// was accepted.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn reboot(&self, serial: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("/devices/{serial}/reboot"))
            .operation("rebootDevice")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Blink the LEDs on a device.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn blink_leds(
        &self,
        serial: &str,
        params: &BlinkLedsParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/devices/{serial}/blinkLeds"))
                .body(to_body(params)?)
                .operation("blinkDeviceLeds")
                .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// List the devices in an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn list_for_organization(
        &self,
        organization_id: &str,
        params: &ListOrganizationDevicesParams,
        total_pages: PageCount,
        direction: PageDirection,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}/devices"),
        )
        .query_pairs(to_query_pairs(params)?)
        .operation("getOrganizationDevices")
        .build()?;
        self.client.get_pages(request, total_pages, direction).await
    }
}
