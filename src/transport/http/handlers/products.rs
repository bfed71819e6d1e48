use crate::domain::dispatch::ApiRequest;
use crate::transport::http::form::ProductForm;
use crate::transport::http::handlers::common::{run, EntityBody};
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/product/get-products",
    responses(
        (status = 200, description = "All products")
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> Response {
    run(&state, ApiRequest::get_products()).await
}

#[utoipa::path(
    get,
    path = "/product/get-products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product"),
        (status = 404, description = "Product not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn get_product_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    run(&state, ApiRequest::get_product(&id)).await
}

#[utoipa::path(
    post,
    path = "/product/create-product",
    responses(
        (status = 200, description = "Created product with its assigned id"),
        (status = 400, description = "Invalid body or unresolved image", body = crate::domain::error::ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)")
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: EntityBody<ProductForm>,
) -> Response {
    run(&state, ApiRequest::add_product(body.into_inner())).await
}

#[utoipa::path(
    put,
    path = "/product/update-product/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Updated product"),
        (status = 400, description = "Invalid body or unresolved image", body = crate::domain::error::ErrorBody),
        (status = 404, description = "Product not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: EntityBody<ProductForm>,
) -> Response {
    run(&state, ApiRequest::update_product(&id, body.into_inner())).await
}

#[utoipa::path(
    delete,
    path = "/product/delete-product/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The removed product"),
        (status = 404, description = "Product not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    run(&state, ApiRequest::delete_product(&id)).await
}
