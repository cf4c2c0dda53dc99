//! Networks endpoint group.
//!
//! Operations on networks: listing within an organization, CRUD, and
//! configuration-template binding.

use serde::Serialize;

use crate::api::{to_body, to_query_pairs};
use crate::clients::errors::{ApiError, ArgumentError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::rest::{PageCount, PageDirection, RestClient};

/// Product line a network can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    /// Security appliances.
    Appliance,
    /// Cameras.
    Camera,
    /// Cellular gateways.
    CellularGateway,
    /// Environmental sensors.
    Sensor,
    /// Switches.
    Switch,
    /// Systems Manager.
    SystemsManager,
    /// Wireless access points.
    Wireless,
}

impl ProductType {
    const ALLOWED: &'static [&'static str] = &[
        "appliance",
        "camera",
        "cellularGateway",
        "sensor",
        "switch",
        "systemsManager",
        "wireless",
    ];
}

impl std::str::FromStr for ProductType {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appliance" => Ok(Self::Appliance),
            "camera" => Ok(Self::Camera),
            "cellularGateway" => Ok(Self::CellularGateway),
            "sensor" => Ok(Self::Sensor),
            "switch" => Ok(Self::Switch),
            "systemsManager" => Ok(Self::SystemsManager),
            "wireless" => Ok(Self::Wireless),
            other => Err(ArgumentError::InvalidValue {
                parameter: "productTypes",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// How a tag filter combines multiple tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TagsFilterType {
    /// Match networks carrying any of the tags.
    WithAnyTags,
    /// Match networks carrying all of the tags.
    WithAllTags,
}

impl TagsFilterType {
    const ALLOWED: &'static [&'static str] = &["withAnyTags", "withAllTags"];
}

impl std::str::FromStr for TagsFilterType {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "withAnyTags" => Ok(Self::WithAnyTags),
            "withAllTags" => Ok(Self::WithAllTags),
            other => Err(ArgumentError::InvalidValue {
                parameter: "tagsFilterType",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Query parameters for listing the networks in an organization.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNetworksParams {
    /// Filter to networks bound to this configuration template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_template_id: Option<String>,
    /// Filter by template-bound state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bound_to_config_template: Option<bool>,
    /// Filter by tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// How multiple tag filters combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_filter_type: Option<TagsFilterType>,
    /// Filter by product types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_types: Option<Vec<ProductType>>,
    /// Entries per page (3-100000; the API default is 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Resume listing after this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Resume listing before this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Body parameters for updating a network.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNetworkParams {
    /// The new name of the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The IANA timezone of the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body parameters for binding a network to a configuration template.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindNetworkParams {
    /// The template to bind to.
    pub config_template_id: String,
    /// Whether switches auto-bind to matching template profiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_bind: Option<bool>,
}

/// Body parameters for unbinding a network from its template.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnbindNetworkParams {
    /// Whether the network keeps its template-derived configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_configs: Option<bool>,
}

/// Operations on networks.
///
/// Obtained from [`RestClient::networks`].
#[derive(Clone, Copy, Debug)]
pub struct Networks<'a> {
    client: &'a RestClient,
}

impl RestClient {
    /// Returns the networks endpoint group.
    #[must_use]
    pub const fn networks(&self) -> Networks<'_> {
        Networks { client: self }
    }
}

impl Networks<'_> {
    /// List the networks that the user has privileges on in an organization.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn list_for_organization(
        &self,
        organization_id: &str,
        params: &ListNetworksParams,
        total_pages: PageCount,
        direction: PageDirection,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/organizations/{organization_id}/networks"),
        )
        .query_pairs(to_query_pairs(params)?)
        .operation("getOrganizationNetworks")
        .build()?;
        self.client.get_pages(request, total_pages, direction).await
    }

    /// Return a network.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn get(&self, network_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/networks/{network_id}"))
            .operation("getNetwork")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Update a network.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn update(
        &self,
        network_id: &str,
        params: &UpdateNetworkParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("/networks/{network_id}"))
            .body(to_body(params)?)
            .operation("updateNetwork")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Delete a network.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn delete(&self, network_id: &str) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, format!("/networks/{network_id}"))
            .operation("deleteNetwork")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Bind a network to a configuration template.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn bind(
        &self,
        network_id: &str,
        params: &BindNetworkParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("/networks/{network_id}/bind"))
            .body(to_body(params)?)
            .operation("bindNetwork")
            .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }

    /// Unbind a network from its configuration template.
    ///
    /// # Errors
    ///
    /// Propagates any session error ([`ApiError`]).
    pub async fn unbind(
        &self,
        network_id: &str,
        params: &UnbindNetworkParams,
    ) -> Result<serde_json::Value, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/networks/{network_id}/unbind"))
                .body(to_body(params)?)
                .operation("unbindNetwork")
                .build()?;
        Ok(self.client.dispatch(request).await?.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::to_query_pairs;

    #[test]
    fn test_product_type_parses_allowed_values() {
        assert_eq!(
            "cellularGateway".parse::<ProductType>().unwrap(),
            ProductType::CellularGateway
        );
        assert_eq!("wireless".parse::<ProductType>().unwrap(), ProductType::Wireless);
    }

    #[test]
    fn test_product_type_rejects_unknown_values() {
        let err = "firewall".parse::<ProductType>().unwrap_err();
        assert!(matches!(
            err,
            ArgumentError::InvalidValue { parameter: "productTypes", .. }
        ));
    }

    #[test]
    fn test_tags_filter_type_parses_allowed_values() {
        assert_eq!(
            "withAllTags".parse::<TagsFilterType>().unwrap(),
            TagsFilterType::WithAllTags
        );
        assert!("withSomeTags".parse::<TagsFilterType>().is_err());
    }

    #[test]
    fn test_list_params_expand_product_types_as_array_params() {
        let params = ListNetworksParams {
            product_types: Some(vec![ProductType::Wireless, ProductType::Switch]),
            per_page: Some(100),
            ..ListNetworksParams::default()
        };

        let pairs = to_query_pairs(&params).unwrap();
        assert!(pairs.contains(&("productTypes[]".to_string(), "wireless".to_string())));
        assert!(pairs.contains(&("productTypes[]".to_string(), "switch".to_string())));
        assert!(pairs.contains(&("perPage".to_string(), "100".to_string())));
    }

    #[test]
    fn test_update_params_skip_absent_fields() {
        let params = UpdateNetworkParams {
            name: Some("Branch 12".to_string()),
            ..UpdateNetworkParams::default()
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Branch 12"}));
    }

    #[test]
    fn test_bind_params_serialize_camel_case() {
        let params = BindNetworkParams {
            config_template_id: "N_23952905".to_string(),
            auto_bind: Some(false),
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"configTemplateId": "N_23952905", "autoBind": false})
        );
    }
}
