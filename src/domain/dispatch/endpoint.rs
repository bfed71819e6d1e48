use crate::domain::error::ApiError;
use std::fmt;
use std::str::FromStr;

/// Every logical operation the mock API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetProducts,
    GetProduct,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    GetAdmins,
    GetAdmin,
    AddAdmin,
    UpdateAdmin,
    DeleteAdmin,
    Login,
    Logout,
}

impl Endpoint {
    pub const ALL: [Endpoint; 12] = [
        Endpoint::GetProducts,
        Endpoint::GetProduct,
        Endpoint::AddProduct,
        Endpoint::UpdateProduct,
        Endpoint::DeleteProduct,
        Endpoint::GetAdmins,
        Endpoint::GetAdmin,
        Endpoint::AddAdmin,
        Endpoint::UpdateAdmin,
        Endpoint::DeleteAdmin,
        Endpoint::Login,
        Endpoint::Logout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::GetProducts => "getProducts",
            Endpoint::GetProduct => "getProduct",
            Endpoint::AddProduct => "addProduct",
            Endpoint::UpdateProduct => "updateProduct",
            Endpoint::DeleteProduct => "deleteProduct",
            Endpoint::GetAdmins => "getAdmins",
            Endpoint::GetAdmin => "getAdmin",
            Endpoint::AddAdmin => "addAdmin",
            Endpoint::UpdateAdmin => "updateAdmin",
            Endpoint::DeleteAdmin => "deleteAdmin",
            Endpoint::Login => "login",
            Endpoint::Logout => "logout",
        }
    }

    /// HTTP method the real catalog API expects for this operation.
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::GetProducts
            | Endpoint::GetProduct
            | Endpoint::GetAdmins
            | Endpoint::GetAdmin => "GET",
            Endpoint::AddProduct | Endpoint::AddAdmin | Endpoint::Login | Endpoint::Logout => {
                "POST"
            }
            Endpoint::UpdateProduct | Endpoint::UpdateAdmin => "PUT",
            Endpoint::DeleteProduct | Endpoint::DeleteAdmin => "DELETE",
        }
    }

    /// Path template of the real catalog API; `:id` marks the entity id segment.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetProducts => "/product/get-products",
            Endpoint::GetProduct => "/product/get-products/:id",
            Endpoint::AddProduct => "/product/create-product",
            Endpoint::UpdateProduct => "/product/update-product/:id",
            Endpoint::DeleteProduct => "/product/delete-product/:id",
            Endpoint::GetAdmins => "/admin/get-admins",
            Endpoint::GetAdmin => "/admin/get-admins/:id",
            Endpoint::AddAdmin => "/admin/create-admin",
            Endpoint::UpdateAdmin => "/admin/update-admin/:id",
            Endpoint::DeleteAdmin => "/admin/delete-admin/:id",
            Endpoint::Login => "/auth/login",
            Endpoint::Logout => "/auth/logout",
        }
    }

    pub fn takes_id(&self) -> bool {
        self.path().ends_with("/:id")
    }

    /// Concrete URL for this operation. Without an id the `:id` segment is dropped.
    pub fn url(&self, id: Option<&str>) -> String {
        let path = self.path();
        match (path.strip_suffix(":id"), id) {
            (Some(prefix), Some(id)) => format!("{}{}", prefix, id),
            (Some(prefix), None) => prefix.trim_end_matches('/').to_string(),
            (None, _) => path.to_string(),
        }
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or(ApiError::EndpointNotFound)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text after the last `/` of `url`, used as the entity id. A trailing `/` means no id.
pub fn extract_id(url: Option<&str>) -> Option<String> {
    let (_, last) = url?.rsplit_once('/')?;
    if last.is_empty() {
        None
    } else {
        Some(last.to_string())
    }
}
