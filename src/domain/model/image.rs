//! Image references and uploads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A persisted image reference: an external URL or a `data:` URI. Empty means "no image".
pub type ImageRef = String;

pub const BLOB_SCHEME: &str = "blob:";
pub const DATA_SCHEME: &str = "data:";

/// How a reference string should be treated before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Empty,
    DataUri,
    /// Ephemeral preview handle; never persisted as-is.
    Blob,
    External,
}

pub fn classify(reference: &str) -> ImageKind {
    if reference.is_empty() {
        ImageKind::Empty
    } else if reference.starts_with(BLOB_SCHEME) {
        ImageKind::Blob
    } else if reference.starts_with(DATA_SCHEME) {
        ImageKind::DataUri
    } else {
        ImageKind::External
    }
}

/// Raw binary content picked by the user, not yet converted to a persisted reference.
///
/// On the JSON wire `data` is base64 encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(serialize_with = "serialize_base64", deserialize_with = "deserialize_base64")]
    pub data: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.map(str::to_string),
            data,
        }
    }
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}

fn deserialize_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| serde::de::Error::custom(format!("invalid base64 file data: {}", e)))
}

/// An image slot as submitted by a caller: either a fresh upload or an existing reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageInput {
    Upload(FileUpload),
    Reference(String),
}

impl From<&str> for ImageInput {
    fn from(value: &str) -> Self {
        ImageInput::Reference(value.to_string())
    }
}

impl From<FileUpload> for ImageInput {
    fn from(value: FileUpload) -> Self {
        ImageInput::Upload(value)
    }
}
