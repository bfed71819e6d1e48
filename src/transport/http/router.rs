use crate::app::StatsSnapshot;
use crate::domain::dispatch::auth::{Credentials, LoginResponse, LogoutResponse};
use crate::domain::dispatch::{ApiRequest, Endpoint};
use crate::domain::error::{ErrorBody, ErrorData};
use crate::transport::http::handlers::{admins, auth, dispatch, health, media, products, stats};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        dispatch::dispatch_handler,
        stats::stats_handler,
        media::register_blob_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler,
        admins::list_admins_handler,
        admins::get_admin_handler,
        admins::create_admin_handler,
        admins::update_admin_handler,
        admins::delete_admin_handler,
        auth::login_handler,
        auth::logout_handler
    ),
    components(schemas(
        ApiRequest,
        ApiResponse,
        ErrorBody,
        ErrorData,
        Credentials,
        LoginResponse,
        LogoutResponse,
        StatsSnapshot,
        media::BlobHandle
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// REST routes reuse the endpoint table's paths, so both surfaces address the same URLs.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/dispatch", post(dispatch::dispatch_handler))
        .route("/api/stats", get(stats::stats_handler))
        .route("/media/blobs", post(media::register_blob_handler))
        .route(Endpoint::GetProducts.path(), get(products::list_products_handler))
        .route(Endpoint::GetProduct.path(), get(products::get_product_handler))
        .route(Endpoint::AddProduct.path(), post(products::create_product_handler))
        .route(Endpoint::UpdateProduct.path(), put(products::update_product_handler))
        .route(Endpoint::DeleteProduct.path(), delete(products::delete_product_handler))
        .route(Endpoint::GetAdmins.path(), get(admins::list_admins_handler))
        .route(Endpoint::GetAdmin.path(), get(admins::get_admin_handler))
        .route(Endpoint::AddAdmin.path(), post(admins::create_admin_handler))
        .route(Endpoint::UpdateAdmin.path(), put(admins::update_admin_handler))
        .route(Endpoint::DeleteAdmin.path(), delete(admins::delete_admin_handler))
        .route(Endpoint::Login.path(), post(auth::login_handler))
        .route(Endpoint::Logout.path(), post(auth::logout_handler))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_routes_and_error_schema() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dispatch",
            "/media/blobs",
            "/product/get-products/{id}",
            "/admin/update-admin/{id}",
            "/auth/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let schemas = doc.components.map(|c| c.schemas).unwrap_or_default();
        for name in ["ErrorBody", "Credentials", "LoginResponse", "LogoutResponse", "BlobHandle"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
