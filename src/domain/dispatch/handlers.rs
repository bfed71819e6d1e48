use super::auth::{self, Credentials};
use crate::app::{CatalogStore, Catalogued};
use crate::domain::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::marker::PhantomData;

/// What a handler receives after the dispatcher has parsed the request.
#[derive(Debug, Clone, Default)]
pub struct Call {
    /// Final URL segment, if any.
    pub id: Option<String>,
    pub body: Option<JsonValue>,
}

#[async_trait]
pub trait EndpointHandler: Send + Sync {
    async fn handle(&self, store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError>;
}

/// A missing or `null` body decodes like an empty object.
pub fn decode_body<T: DeserializeOwned>(body: Option<JsonValue>) -> Result<T, ApiError> {
    let body = match body {
        None | Some(JsonValue::Null) => JsonValue::Object(Default::default()),
        Some(v) => v,
    };
    serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

// The URL id wins; a body `id` is only used when the URL carries none.
fn update_target(call: &Call) -> Option<String> {
    call.id.clone().or_else(|| {
        call.body
            .as_ref()
            .and_then(|b| b.get("id"))
            .and_then(|v| match v {
                JsonValue::String(s) => Some(s.clone()),
                JsonValue::Number(n) => Some(n.to_string()),
                _ => None,
            })
    })
}

macro_rules! entity_handler {
    ($name:ident) => {
        pub struct $name<E>(PhantomData<fn() -> E>);

        impl<E> $name<E> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<E> Default for $name<E> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

entity_handler!(ListHandler);
entity_handler!(GetHandler);
entity_handler!(CreateHandler);
entity_handler!(UpdateHandler);
entity_handler!(DeleteHandler);

#[async_trait]
impl<E: Catalogued> EndpointHandler for ListHandler<E> {
    async fn handle(&self, store: &CatalogStore, _call: Call) -> Result<JsonValue, ApiError> {
        Ok(serde_json::to_value(store.list::<E>().await)?)
    }
}

#[async_trait]
impl<E: Catalogued> EndpointHandler for GetHandler<E> {
    async fn handle(&self, store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError> {
        let id = call.id.ok_or(ApiError::NotFound(E::KIND))?;
        Ok(serde_json::to_value(store.get::<E>(&id).await?)?)
    }
}

#[async_trait]
impl<E: Catalogued> EndpointHandler for CreateHandler<E> {
    async fn handle(&self, store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError> {
        let draft: E::Draft = decode_body(call.body)?;
        Ok(serde_json::to_value(store.create::<E>(draft).await?)?)
    }
}

#[async_trait]
impl<E: Catalogued> EndpointHandler for UpdateHandler<E> {
    async fn handle(&self, store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError> {
        let id = update_target(&call).ok_or(ApiError::NotFound(E::KIND))?;
        let draft: E::Draft = decode_body(call.body)?;
        Ok(serde_json::to_value(store.update::<E>(&id, draft).await?)?)
    }
}

#[async_trait]
impl<E: Catalogued> EndpointHandler for DeleteHandler<E> {
    async fn handle(&self, store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError> {
        let id = call.id.ok_or(ApiError::NotFound(E::KIND))?;
        Ok(serde_json::to_value(store.delete::<E>(&id).await?)?)
    }
}

pub struct LoginHandler;

// Anything that is not a string compares unequal to the mock account, so it is a failed login.
fn credential_field(body: Option<&JsonValue>, field: &str) -> String {
    body.and_then(|b| b.get(field))
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl EndpointHandler for LoginHandler {
    async fn handle(&self, _store: &CatalogStore, call: Call) -> Result<JsonValue, ApiError> {
        let body = call.body.as_ref();
        let credentials = Credentials {
            username: credential_field(body, "username"),
            password: credential_field(body, "password"),
        };
        Ok(serde_json::to_value(auth::login(&credentials)?)?)
    }
}

pub struct LogoutHandler;

#[async_trait]
impl EndpointHandler for LogoutHandler {
    async fn handle(&self, _store: &CatalogStore, _call: Call) -> Result<JsonValue, ApiError> {
        Ok(serde_json::to_value(auth::logout())?)
    }
}
