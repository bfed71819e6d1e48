use crate::domain::dispatch::ApiRequest;
use crate::domain::error::ApiError;
use crate::domain::model::FileUpload;
use crate::transport::http::form::{FormField, FormLayout};
use crate::transport::http::types::{json_422, AppState};
use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;
use std::marker::PhantomData;
use tracing::debug;

/// Renders a dispatcher outcome: the bare value on success, `{status, data:{message}}` on failure.
pub fn respond(result: Result<JsonValue, ApiError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => error_response(&err),
    }
}

pub fn error_response(err: &ApiError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_body())).into_response()
}

pub async fn run(state: &AppState, request: ApiRequest) -> Response {
    respond(state.dispatcher.dispatch(request).await)
}

/// Entity body accepted either as JSON or as `multipart/form-data` in the layout `L`.
///
/// Either way the handler receives the JSON form of the draft.
pub struct EntityBody<L>(pub JsonValue, PhantomData<fn() -> L>);

impl<L> EntityBody<L> {
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

fn bad_multipart(err: impl std::fmt::Display) -> Response {
    error_response(&ApiError::BadRequest(format!("Invalid multipart body: {}", err)))
}

// Browsers send an empty, nameless file part for a file input left untouched.
pub(crate) fn is_unpicked_file(file_name: &str, data: &[u8]) -> bool {
    file_name.is_empty() && data.is_empty()
}

pub(crate) async fn collect_fields(mut multipart: Multipart) -> Result<Vec<FormField>, Response> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(bad_multipart)?;
                if is_unpicked_file(&file_name, &data) {
                    debug!(field = %name, "skipping empty file part");
                    continue;
                }
                fields.push(FormField::file(
                    name,
                    FileUpload::new(file_name, content_type.as_deref(), data.to_vec()),
                ));
            }
            None => {
                let text = field.text().await.map_err(bad_multipart)?;
                fields.push(FormField::text(name, text));
            }
        }
    }
    Ok(fields)
}

#[async_trait]
impl<S, L> FromRequest<S> for EntityBody<L>
where
    S: Send + Sync,
    L: FormLayout,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            let fields = collect_fields(multipart).await?;
            let draft = L::parse(fields).map_err(|e| error_response(&e))?;
            let value = serde_json::to_value(draft)
                .map_err(|e| error_response(&ApiError::from(e)))?;
            return Ok(EntityBody(value, PhantomData));
        }

        match Json::<JsonValue>::from_request(req, state).await {
            Ok(Json(value)) => Ok(EntityBody(value, PhantomData)),
            Err(e) => Err(json_422(e, "an entity object or multipart form").into_response()),
        }
    }
}
