//! The mock catalog store.
//!
//! This module stands in for the remote catalog API while the admin UI is developed:
//! 1.  Holds one in-memory collection per entity kind, seeded once from the key/value backend.
//! 2.  Normalizes image inputs (uploads, blob handles) before anything is written.
//! 3.  Writes the whole collection back after every successful mutation.

use crate::domain::error::ApiError;
use crate::domain::model::{Admin, Entity, Product};
use crate::media::MediaResolver;
use crate::storage::{
    load_counter, load_or_seed, persist, persist_counter, KeyValueStore, MemoryKvStore, SeedSource,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

/// How new entity ids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `collection length + 1`. Reuses ids after a deletion; kept for clients that rely on it.
    CollectionLength,
    /// One past the highest numeric id ever seen by this collection.
    #[default]
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "collection-length" | "collection_length" => Ok(IdStrategy::CollectionLength),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(anyhow::anyhow!(
                "unknown id strategy {:?} (expected \"monotonic\" or \"length\")",
                other
            )),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::CollectionLength => f.write_str("length"),
            IdStrategy::Monotonic => f.write_str("monotonic"),
        }
    }
}

struct CollectionState<E> {
    items: Vec<E>,
    next_id: u64,
}

impl<E: Entity> CollectionState<E> {
    /// `stored_next_id` is the persisted counter; it only ever raises the starting point.
    fn new(items: Vec<E>, stored_next_id: Option<u64>) -> Self {
        let mut after_items = 1;
        for id in items.iter().filter_map(|e| e.id().parse::<u64>().ok()) {
            match id.checked_add(1) {
                Some(next) => after_items = after_items.max(next),
                None => warn!(kind = %E::KIND, id, "id cannot be advanced past, skipping it"),
            }
        }
        let next_id = stored_next_id.map_or(after_items, |stored| stored.max(after_items));
        Self { items, next_id }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|e| e.id() == id)
    }

    fn allocate_id(&mut self, strategy: IdStrategy) -> Result<String, ApiError> {
        match strategy {
            IdStrategy::CollectionLength => Ok((self.items.len() + 1).to_string()),
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id = id
                    .checked_add(1)
                    .ok_or_else(|| ApiError::Internal(format!("{} id space exhausted", E::KIND)))?;
                Ok(id.to_string())
            }
        }
    }
}

/// One entity kind's collection plus its persistence binding.
///
/// A mutation and its write-back happen under the same write lock, so concurrent mutations
/// are serialized and a write-back always contains every earlier mutation.
pub struct EntityCollection<E: Entity> {
    state: RwLock<CollectionState<E>>,
    kv: Arc<dyn KeyValueStore>,
    id_strategy: IdStrategy,
}

impl<E: Entity> EntityCollection<E> {
    /// Seeds from `kv`, falling back to the built-in records, and picks up the stored id counter.
    pub async fn load(kv: Arc<dyn KeyValueStore>, id_strategy: IdStrategy) -> (Self, SeedSource) {
        let (items, source) = load_or_seed::<E>(kv.as_ref()).await;
        let stored_next_id = load_counter(kv.as_ref(), E::KIND).await;
        info!(
            kind = %E::KIND,
            count = items.len(),
            source = ?source,
            next_id = ?stored_next_id,
            "> Loaded collection"
        );
        let collection = Self {
            state: RwLock::new(CollectionState::new(items, stored_next_id)),
            kv,
            id_strategy,
        };
        (collection, source)
    }

    pub fn from_items(items: Vec<E>, kv: Arc<dyn KeyValueStore>, id_strategy: IdStrategy) -> Self {
        Self {
            state: RwLock::new(CollectionState::new(items, None)),
            kv,
            id_strategy,
        }
    }

    /// A copy of the whole collection; later mutations are not reflected in it.
    pub async fn list(&self) -> Vec<E> {
        self.state.read().await.items.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Result<E, ApiError> {
        let state = self.state.read().await;
        state
            .position(id)
            .map(|i| state.items[i].clone())
            .ok_or(ApiError::NotFound(E::KIND))
    }

    pub async fn insert(&self, patch: E::Patch) -> Result<E, ApiError> {
        let mut state = self.state.write().await;
        let id = state.allocate_id(self.id_strategy)?;
        let entity = E::create(id, patch);
        state.items.push(entity.clone());
        persist(self.kv.as_ref(), &state.items).await;
        if self.id_strategy == IdStrategy::Monotonic {
            persist_counter(self.kv.as_ref(), E::KIND, state.next_id).await;
        }
        info!(kind = %E::KIND, id = entity.id(), "> Created entity");
        Ok(entity)
    }

    pub async fn update(&self, id: &str, patch: E::Patch) -> Result<E, ApiError> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or(ApiError::NotFound(E::KIND))?;
        state.items[index].merge(patch);
        let updated = state.items[index].clone();
        persist(self.kv.as_ref(), &state.items).await;
        info!(kind = %E::KIND, id, "> Updated entity");
        Ok(updated)
    }

    pub async fn remove(&self, id: &str) -> Result<E, ApiError> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or(ApiError::NotFound(E::KIND))?;
        let removed = state.items.remove(index);
        persist(self.kv.as_ref(), &state.items).await;
        info!(kind = %E::KIND, id, "> Deleted entity");
        Ok(removed)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    pub id_strategy: IdStrategy,
}

/// Dashboard counters.
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_products: usize,
    pub total_admins: usize,
    #[schema(value_type = String)]
    pub generated_at: DateTime<Utc>,
}

/// Both collections and the media resolver, constructed once per process.
pub struct CatalogStore {
    products: EntityCollection<Product>,
    admins: EntityCollection<Admin>,
    media: MediaResolver,
}

/// Ties an entity kind to its collection inside [`CatalogStore`].
pub trait Catalogued: Entity {
    fn collection(store: &CatalogStore) -> &EntityCollection<Self>;
}

impl Catalogued for Product {
    fn collection(store: &CatalogStore) -> &EntityCollection<Self> {
        &store.products
    }
}

impl Catalogued for Admin {
    fn collection(store: &CatalogStore) -> &EntityCollection<Self> {
        &store.admins
    }
}

impl CatalogStore {
    pub async fn open(
        kv: Arc<dyn KeyValueStore>,
        media: MediaResolver,
        options: StoreOptions,
    ) -> Self {
        info!(backend = %kv.describe(), id_strategy = %options.id_strategy, "> Opening catalog store");
        let (products, _) = EntityCollection::load(kv.clone(), options.id_strategy).await;
        let (admins, _) = EntityCollection::load(kv, options.id_strategy).await;
        Self {
            products,
            admins,
            media,
        }
    }

    /// Volatile store with default options, seeded from the built-in records.
    pub async fn in_memory() -> Self {
        Self::open(
            Arc::new(MemoryKvStore::new()),
            MediaResolver::default(),
            StoreOptions::default(),
        )
        .await
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    pub fn products(&self) -> &EntityCollection<Product> {
        &self.products
    }

    pub fn admins(&self) -> &EntityCollection<Admin> {
        &self.admins
    }

    pub async fn list<E: Catalogued>(&self) -> Vec<E> {
        E::collection(self).list().await
    }

    pub async fn get<E: Catalogued>(&self, id: &str) -> Result<E, ApiError> {
        E::collection(self).get(id).await
    }

    /// Normalizes images first; nothing is written if any image fails to resolve.
    pub async fn create<E: Catalogued>(&self, draft: E::Draft) -> Result<E, ApiError> {
        let patch = E::resolve_images(draft, &self.media).await?;
        E::collection(self).insert(patch).await
    }

    pub async fn update<E: Catalogued>(&self, id: &str, draft: E::Draft) -> Result<E, ApiError> {
        let patch = E::resolve_images(draft, &self.media).await?;
        E::collection(self).update(id, patch).await
    }

    pub async fn delete<E: Catalogued>(&self, id: &str) -> Result<E, ApiError> {
        E::collection(self).remove(id).await
    }

    pub async fn stats(&self) -> StatsSnapshot {
        let snapshot = StatsSnapshot {
            total_products: self.products.len().await,
            total_admins: self.admins.len().await,
            generated_at: Utc::now(),
        };
        debug!(?snapshot, "computed stats");
        snapshot
    }
}
