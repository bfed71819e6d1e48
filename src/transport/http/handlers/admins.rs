use crate::domain::dispatch::ApiRequest;
use crate::transport::http::form::AdminForm;
use crate::transport::http::handlers::common::{run, EntityBody};
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/admin/get-admins",
    responses(
        (status = 200, description = "All admins")
    )
)]
pub async fn list_admins_handler(State(state): State<AppState>) -> Response {
    run(&state, ApiRequest::get_admins()).await
}

#[utoipa::path(
    get,
    path = "/admin/get-admins/{id}",
    params(
        ("id" = String, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "The admin"),
        (status = 404, description = "Admin not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn get_admin_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    run(&state, ApiRequest::get_admin(&id)).await
}

#[utoipa::path(
    post,
    path = "/admin/create-admin",
    responses(
        (status = 200, description = "Created admin with its assigned id"),
        (status = 400, description = "Invalid body or unresolved image", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn create_admin_handler(
    State(state): State<AppState>,
    body: EntityBody<AdminForm>,
) -> Response {
    run(&state, ApiRequest::add_admin(body.into_inner())).await
}

#[utoipa::path(
    put,
    path = "/admin/update-admin/{id}",
    params(
        ("id" = String, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Updated admin"),
        (status = 404, description = "Admin not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn update_admin_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: EntityBody<AdminForm>,
) -> Response {
    run(&state, ApiRequest::update_admin(&id, body.into_inner())).await
}

#[utoipa::path(
    delete,
    path = "/admin/delete-admin/{id}",
    params(
        ("id" = String, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "The removed admin"),
        (status = 404, description = "Admin not found", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn delete_admin_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    run(&state, ApiRequest::delete_admin(&id)).await
}
