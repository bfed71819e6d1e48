use crate::domain::dispatch::{ApiRequest, Endpoint};
use crate::transport::http::handlers::common::run;
use crate::transport::http::types::{json_422, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = crate::domain::dispatch::auth::Credentials,
    responses(
        (status = 200, description = "Logged in", body = crate::domain::dispatch::auth::LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::domain::error::ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)")
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(body) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"username\": \"...\", \"password\": \"...\"}").into_response()
        }
    };
    run(&state, ApiRequest::new(Endpoint::Login, None, Some(body))).await
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = crate::domain::dispatch::auth::LogoutResponse)
    )
)]
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    run(&state, ApiRequest::logout()).await
}
