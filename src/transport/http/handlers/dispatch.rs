use crate::domain::dispatch::ApiRequest;
use crate::transport::http::handlers::common::run;
use crate::transport::http::types::{json_422, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/dispatch",
    request_body = ApiRequest,
    responses(
        (status = 200, description = "Resolved value of the endpoint (entity, list, token or logout ack)"),
        (status = 400, description = "Bad request body", body = crate::domain::error::ErrorBody),
        (status = 401, description = "Invalid credentials", body = crate::domain::error::ErrorBody),
        (status = 404, description = "Entity or endpoint not found", body = crate::domain::error::ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)")
    )
)]
pub async fn dispatch_handler(
    State(state): State<AppState>,
    request: Result<Json<ApiRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"endpointName\": \"...\", \"url\": \"...\", \"body\": {...}}")
                .into_response();
        }
    };
    run(&state, request).await
}
