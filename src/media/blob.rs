//! Ephemeral preview handles for uploads that have not been saved yet.
//!
//! A handle looks like `blob:<32 hex chars>` and is only meaningful inside the running process.
//! Handles are resolved back to their upload when an entity is written, so the handle string
//! itself never reaches storage.

use crate::domain::model::image::BLOB_SCHEME;
use crate::domain::model::FileUpload;
use rand::RngCore;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct BlobRegistry {
    blobs: RwLock<HashMap<String, FileUpload>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `upload` in memory and returns a fresh handle for it.
    pub async fn register(&self, upload: FileUpload) -> String {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        let handle = format!("{}{}", BLOB_SCHEME, hex::encode(bytes));
        self.blobs.write().await.insert(handle.clone(), upload);
        handle
    }

    pub async fn resolve(&self, handle: &str) -> Option<FileUpload> {
        self.blobs.read().await.get(handle).cloned()
    }

    /// Forgets a handle. Returns false if it was unknown.
    pub async fn revoke(&self, handle: &str) -> bool {
        self.blobs.write().await.remove(handle).is_some()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
