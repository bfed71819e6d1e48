pub mod catalog_store;

pub use catalog_store::{
    CatalogStore, Catalogued, EntityCollection, IdStrategy, StatsSnapshot, StoreOptions,
};
