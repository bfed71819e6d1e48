//! Whole-collection records: one JSON array per entity kind.
//!
//! Reads never fail: an absent, unreadable or malformed record yields the built-in seed.
//! Writes never fail either: errors are logged and the in-memory state stays authoritative.

use super::KeyValueStore;
use crate::domain::model::{Entity, EntityKind};
use tracing::{error, warn};

/// Where a loaded collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Stored,
    Absent,
    /// The record existed but could not be used.
    Recovered(String),
}

impl SeedSource {
    pub fn is_stored(&self) -> bool {
        matches!(self, SeedSource::Stored)
    }
}

pub async fn load_or_seed<E: Entity>(kv: &dyn KeyValueStore) -> (Vec<E>, SeedSource) {
    let key = E::KIND.storage_key();
    let raw = match kv.get(key).await {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return (E::seed(), SeedSource::Absent),
        Err(e) => {
            warn!(key, error = %e, "could not read stored collection, using built-in seed");
            return (E::seed(), SeedSource::Recovered(e.to_string()));
        }
    };
    match serde_json::from_str::<Vec<E>>(&raw) {
        Ok(items) => (items, SeedSource::Stored),
        Err(e) => {
            warn!(key, error = %e, "stored collection is malformed, using built-in seed");
            (E::seed(), SeedSource::Recovered(e.to_string()))
        }
    }
}

/// Serializes the full collection under the kind's key. Returns whether the write succeeded.
pub async fn persist<E: Entity>(kv: &dyn KeyValueStore, items: &[E]) -> bool {
    let key = E::KIND.storage_key();
    let raw = match serde_json::to_string(items) {
        Ok(raw) => raw,
        Err(e) => {
            error!(key, error = %e, "could not serialize collection");
            return false;
        }
    };
    match kv.set(key, raw).await {
        Ok(()) => true,
        Err(e) => {
            error!(key, error = %e, "could not write collection");
            false
        }
    }
}

/// Stored id counter for `kind`. Absent or unreadable counters yield `None`.
pub async fn load_counter(kv: &dyn KeyValueStore, kind: EntityKind) -> Option<u64> {
    let key = kind.counter_key();
    match kv.get(key).await {
        Ok(Some(raw)) if !raw.trim().is_empty() => match raw.trim().parse::<u64>() {
            Ok(next) => Some(next),
            Err(e) => {
                warn!(key, error = %e, "stored id counter is malformed, ignoring it");
                None
            }
        },
        Ok(_) => None,
        Err(e) => {
            warn!(key, error = %e, "could not read stored id counter");
            None
        }
    }
}

pub async fn persist_counter(kv: &dyn KeyValueStore, kind: EntityKind, next_id: u64) -> bool {
    let key = kind.counter_key();
    match kv.set(key, next_id.to_string()).await {
        Ok(()) => true,
        Err(e) => {
            error!(key, error = %e, "could not write id counter");
            false
        }
    }
}
