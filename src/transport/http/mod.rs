pub mod form;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod admins;
    pub mod auth;
    pub mod common;
    pub mod dispatch;
    pub mod health;
    pub mod media;
    pub mod products;
    pub mod stats;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
