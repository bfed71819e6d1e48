//! Endpoint dispatcher: routes a logical request to the matching store operation, so request
//! construction does not care whether a real server or the mock answers.

pub mod auth;
pub mod endpoint;
pub mod handlers;
pub mod registry;
pub mod request;

pub use endpoint::{extract_id, Endpoint};
pub use handlers::{Call, EndpointHandler};
pub use registry::HandlerRegistry;
pub use request::ApiRequest;

use crate::app::CatalogStore;
use crate::domain::error::ApiError;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Dispatcher {
    store: Arc<CatalogStore>,
    handlers: HandlerRegistry,
}

impl Dispatcher {
    /// Fails if any endpoint has no handler.
    pub fn new(store: Arc<CatalogStore>, handlers: HandlerRegistry) -> anyhow::Result<Self> {
        let missing = handlers.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(Endpoint::as_str).collect();
            return Err(anyhow::anyhow!(
                "Handler registry is missing endpoints: {}",
                names.join(", ")
            ));
        }
        Ok(Self { store, handlers })
    }

    pub fn with_defaults(store: Arc<CatalogStore>) -> anyhow::Result<Self> {
        Self::new(store, HandlerRegistry::with_defaults())
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub async fn dispatch(&self, request: ApiRequest) -> Result<JsonValue, ApiError> {
        let endpoint = match request.endpoint_name.parse::<Endpoint>() {
            Ok(e) => e,
            Err(err) => {
                debug!(endpoint = %request.endpoint_name, "unknown endpoint");
                return Err(err);
            }
        };
        let handler = self.handlers.get(endpoint).ok_or(ApiError::EndpointNotFound)?;
        let id = extract_id(request.url.as_deref());
        debug!(
            %endpoint,
            method = request.method.as_deref().unwrap_or("-"),
            id = id.as_deref().unwrap_or("-"),
            "dispatching"
        );

        let result = handler
            .handle(
                &self.store,
                Call {
                    id,
                    body: request.body,
                },
            )
            .await;
        if let Err(err) = &result {
            warn!(%endpoint, status = err.status(), error = %err, "request failed");
        }
        result
    }
}
