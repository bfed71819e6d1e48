// src/bin/api_server.rs

use catalog_admin_mock::domain::dispatch::Dispatcher;
use catalog_admin_mock::infra::{config::Config, telemetry};
use catalog_admin_mock::transport;
use catalog_admin_mock::{CatalogStore, FileKvStore, KeyValueStore, MediaResolver, MemoryKvStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init();

    // --- Storage Backend ---
    let kv: Arc<dyn KeyValueStore> = match &config.storage_dir {
        Some(dir) => Arc::new(FileKvStore::new(dir.clone())),
        None => {
            warn!("> CATALOG_STORAGE_DIR not set; changes are lost on restart");
            Arc::new(MemoryKvStore::new())
        }
    };

    // --- Catalog Store Initialization ---
    info!(backend = %config.backend_label(), "> Initializing catalog store...");
    let store = Arc::new(CatalogStore::open(kv, MediaResolver::default(), config.store).await);
    let dispatcher = Dispatcher::with_defaults(store)?;
    let app_state = transport::http::AppState {
        dispatcher: Arc::new(dispatcher),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let local = listener.local_addr()?;
    info!("> API server listening on http://{}", local);
    info!("> Swagger UI available at http://{}/swagger-ui", local);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("> Shutdown signal received (Ctrl+C)");
        }
    }

    Ok(())
}
