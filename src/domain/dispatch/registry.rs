//! HandlerRegistry for mapping endpoint names to EndpointHandler implementations.

use super::handlers::{
    CreateHandler, DeleteHandler, EndpointHandler, GetHandler, ListHandler, LoginHandler,
    LogoutHandler, UpdateHandler,
};
use super::Endpoint;
use crate::domain::model::{Admin, Product};
use std::collections::HashMap;
use std::sync::Arc;

/// A registry that maps each endpoint to exactly one handler.
pub struct HandlerRegistry {
    handlers: HashMap<Endpoint, Arc<dyn EndpointHandler>>,
}

impl HandlerRegistry {
    /// Creates a new empty HandlerRegistry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The standard routing: every endpoint bound to its store or auth operation.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(Endpoint::GetProducts, ListHandler::<Product>::new());
        reg.register(Endpoint::GetProduct, GetHandler::<Product>::new());
        reg.register(Endpoint::AddProduct, CreateHandler::<Product>::new());
        reg.register(Endpoint::UpdateProduct, UpdateHandler::<Product>::new());
        reg.register(Endpoint::DeleteProduct, DeleteHandler::<Product>::new());
        reg.register(Endpoint::GetAdmins, ListHandler::<Admin>::new());
        reg.register(Endpoint::GetAdmin, GetHandler::<Admin>::new());
        reg.register(Endpoint::AddAdmin, CreateHandler::<Admin>::new());
        reg.register(Endpoint::UpdateAdmin, UpdateHandler::<Admin>::new());
        reg.register(Endpoint::DeleteAdmin, DeleteHandler::<Admin>::new());
        reg.register(Endpoint::Login, LoginHandler);
        reg.register(Endpoint::Logout, LogoutHandler);
        reg
    }

    /// Registers (or replaces) the handler for `endpoint`.
    pub fn register<H: EndpointHandler + 'static>(&mut self, endpoint: Endpoint, handler: H) {
        self.handlers.insert(endpoint, Arc::new(handler));
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<Arc<dyn EndpointHandler>> {
        self.handlers.get(&endpoint).cloned()
    }

    /// Endpoints with no handler, in declaration order.
    pub fn missing(&self) -> Vec<Endpoint> {
        Endpoint::ALL
            .into_iter()
            .filter(|e| !self.handlers.contains_key(e))
            .collect()
    }

    pub fn is_total(&self) -> bool {
        self.missing().is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
