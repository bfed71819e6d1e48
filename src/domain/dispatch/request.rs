use super::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A logical request: which operation, plus the URL and body a real server would receive.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// One of the fixed endpoint names, e.g. `getProducts`.
    pub endpoint_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// The trailing path segment is taken as the entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    /// Builds the descriptor a UI would generate for `endpoint`.
    pub fn new(endpoint: Endpoint, id: Option<&str>, body: Option<JsonValue>) -> Self {
        Self {
            endpoint_name: endpoint.as_str().to_string(),
            method: Some(endpoint.method().to_string()),
            url: Some(endpoint.url(id)),
            body,
        }
    }

    pub fn get_products() -> Self {
        Self::new(Endpoint::GetProducts, None, None)
    }

    pub fn get_product(id: &str) -> Self {
        Self::new(Endpoint::GetProduct, Some(id), None)
    }

    pub fn add_product(body: JsonValue) -> Self {
        Self::new(Endpoint::AddProduct, None, Some(body))
    }

    pub fn update_product(id: &str, body: JsonValue) -> Self {
        Self::new(Endpoint::UpdateProduct, Some(id), Some(body))
    }

    pub fn delete_product(id: &str) -> Self {
        Self::new(Endpoint::DeleteProduct, Some(id), None)
    }

    pub fn get_admins() -> Self {
        Self::new(Endpoint::GetAdmins, None, None)
    }

    pub fn get_admin(id: &str) -> Self {
        Self::new(Endpoint::GetAdmin, Some(id), None)
    }

    pub fn add_admin(body: JsonValue) -> Self {
        Self::new(Endpoint::AddAdmin, None, Some(body))
    }

    pub fn update_admin(id: &str, body: JsonValue) -> Self {
        Self::new(Endpoint::UpdateAdmin, Some(id), Some(body))
    }

    pub fn delete_admin(id: &str) -> Self {
        Self::new(Endpoint::DeleteAdmin, Some(id), None)
    }

    pub fn login(username: &str, password: &str) -> Self {
        Self::new(
            Endpoint::Login,
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        )
    }

    pub fn logout() -> Self {
        Self::new(Endpoint::Logout, None, None)
    }

    /// A descriptor for an arbitrary (possibly unknown) endpoint name.
    pub fn named(endpoint_name: &str, url: Option<&str>, body: Option<JsonValue>) -> Self {
        Self {
            endpoint_name: endpoint_name.to_string(),
            method: None,
            url: url.map(str::to_string),
            body,
        }
    }
}
