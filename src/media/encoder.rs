// Turns raw uploads into self-contained image references.

use crate::domain::model::FileUpload;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Converts an upload into a reference that can be persisted as a plain string.
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn encode(&self, upload: &FileUpload) -> anyhow::Result<String>;
}

/// Encodes uploads as `data:<content-type>;base64,<payload>` URIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUriEncoder;

#[async_trait]
impl ImageEncoder for DataUriEncoder {
    async fn encode(&self, upload: &FileUpload) -> anyhow::Result<String> {
        Ok(to_data_uri(upload))
    }
}

pub fn to_data_uri(upload: &FileUpload) -> String {
    let content_type = upload
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(FALLBACK_CONTENT_TYPE);
    format!("data:{};base64,{}", content_type, STANDARD.encode(&upload.data))
}
