//! Caller-facing failures of the mock API.
//!
//! Every failure is rendered as `{ "status": <code>, "data": { "message": <text> } }`, the
//! shape the admin UI displays directly.

use crate::domain::model::EntityKind;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{} not found", .0.label())]
    NotFound(EntityKind),

    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Unresolved blob reference: {0}")]
    UnresolvedBlob(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) | ApiError::EndpointNotFound => 404,
            ApiError::Unauthorized => 401,
            ApiError::BadRequest(_) | ApiError::UnresolvedBlob(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status(),
            data: ErrorData {
                message: self.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("serialization failed: {}", err))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorBody {
    pub status: u16,
    pub data: ErrorData,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorData {
    pub message: String,
}
