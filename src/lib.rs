pub mod app;
pub mod domain;
pub mod infra;
pub mod media;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CatalogStore, IdStrategy, StoreOptions};
pub use domain::dispatch::{ApiRequest, Dispatcher, Endpoint};
pub use domain::error::ApiError;
pub use domain::model::{Admin, Product};
pub use media::MediaResolver;
pub use storage::{FileKvStore, KeyValueStore, MemoryKvStore};
