use crate::domain::error::ApiError;
use crate::transport::http::form::FormValue;
use crate::transport::http::handlers::common::{collect_fields, error_response};
use crate::transport::http::types::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

/// Preview handle for an upload that has not been saved on an entity yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BlobHandle {
    pub handle: String,
}

/// Registers the first file part of a multipart body and returns its `blob:` handle.
///
/// The handle can then be used in any image slot of a create or update request.
#[utoipa::path(
    post,
    path = "/media/blobs",
    responses(
        (status = 200, description = "Registered preview handle", body = BlobHandle),
        (status = 400, description = "No file part in the body", body = crate::domain::error::ErrorBody)
    )
)]
pub async fn register_blob_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let fields = match collect_fields(multipart).await {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    let upload = fields.into_iter().find_map(|f| match f.value {
        FormValue::File(upload) => Some(upload),
        FormValue::Text(_) => None,
    });
    let Some(upload) = upload else {
        return error_response(&ApiError::BadRequest("Missing file part".to_string()));
    };

    let file_name = upload.file_name.clone();
    let handle = state.dispatcher.store().media().blobs().register(upload).await;
    info!(%handle, file = %file_name, "> Registered blob");
    (StatusCode::OK, Json(BlobHandle { handle })).into_response()
}
