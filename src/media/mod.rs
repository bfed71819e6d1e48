//! Image normalization: uploads and blob handles become persisted references.

pub mod blob;
pub mod encoder;

pub use blob::BlobRegistry;
pub use encoder::{to_data_uri, DataUriEncoder, ImageEncoder};

use crate::domain::error::ApiError;
use crate::domain::model::{classify, FileUpload, ImageInput, ImageKind, ImageRef};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves every image slot of a request into a string that is safe to store.
///
/// - uploads are encoded through the configured [`ImageEncoder`];
/// - `blob:` handles are looked up in the [`BlobRegistry`] and encoded the same way;
/// - URLs, `data:` URIs and empty strings pass through unchanged.
pub struct MediaResolver {
    encoder: Arc<dyn ImageEncoder>,
    blobs: Arc<BlobRegistry>,
}

impl MediaResolver {
    pub fn new(encoder: Arc<dyn ImageEncoder>, blobs: Arc<BlobRegistry>) -> Self {
        Self { encoder, blobs }
    }

    pub fn blobs(&self) -> &Arc<BlobRegistry> {
        &self.blobs
    }

    pub async fn resolve(&self, input: ImageInput) -> Result<ImageRef, ApiError> {
        match input {
            ImageInput::Upload(upload) => self.encode(&upload).await,
            ImageInput::Reference(reference) => match classify(&reference) {
                ImageKind::Blob => {
                    let upload = self
                        .blobs
                        .resolve(&reference)
                        .await
                        .ok_or_else(|| ApiError::UnresolvedBlob(reference.clone()))?;
                    debug!(handle = %reference, file = %upload.file_name, "resolved blob handle");
                    self.encode(&upload).await
                }
                ImageKind::Empty | ImageKind::DataUri | ImageKind::External => Ok(reference),
            },
        }
    }

    /// Resolves a list in order. Fails on the first slot that cannot be resolved.
    pub async fn resolve_all(&self, inputs: Vec<ImageInput>) -> Result<Vec<ImageRef>, ApiError> {
        let mut out = Vec::with_capacity(inputs.len());
        for input in inputs {
            out.push(self.resolve(input).await?);
        }
        Ok(out)
    }

    async fn encode(&self, upload: &FileUpload) -> Result<ImageRef, ApiError> {
        self.encoder.encode(upload).await.map_err(|e| {
            warn!(file = %upload.file_name, error = %e, "image encoding failed");
            ApiError::BadRequest(format!("Could not encode image {}: {}", upload.file_name, e))
        })
    }
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new(Arc::new(DataUriEncoder), Arc::new(BlobRegistry::new()))
    }
}
