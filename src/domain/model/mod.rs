//! Catalog entity definitions.

use crate::domain::error::ApiError;
use crate::media::MediaResolver;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod admin;
pub mod image;
pub mod localized;
pub mod product;
pub mod seed;
pub mod size;

pub use admin::{Admin, AdminDraft, AdminFields, AdminPatch};
pub use image::{classify, FileUpload, ImageInput, ImageKind, ImageRef};
pub use localized::{Language, Localized, LocalizedInput, Scalar, SUPPORTED_LANGUAGES};
pub use product::{Product, ProductDraft, ProductFields, ProductPatch};
pub use size::Size;

/// The two collections the mock API manages, each with its own id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Admin,
}

impl EntityKind {
    /// Human label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Product => "Product",
            EntityKind::Admin => "Admin",
        }
    }

    /// Fixed key the whole collection is persisted under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            EntityKind::Product => "mockProducts",
            EntityKind::Admin => "mockAdmins",
        }
    }

    /// Key holding the next id to hand out, so ids stay unique across restarts.
    pub fn counter_key(&self) -> &'static str {
        match self {
            EntityKind::Product => "mockProductsNextId",
            EntityKind::Admin => "mockAdminsNextId",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract shared by every entity kind the store manages.
///
/// `Draft` is what callers submit (images may still be uploads or blob handles); `Patch` is the
/// same set of fields after every image has been turned into a persisted reference.
#[async_trait]
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    type Draft: DeserializeOwned + Serialize + Send + 'static;
    type Patch: Send + 'static;

    fn id(&self) -> &str;

    /// Builds a new entity; fields absent from `patch` get their normalized defaults.
    fn create(id: String, patch: Self::Patch) -> Self;

    /// Shallow merge: every field named in `patch` replaces the current value wholesale.
    fn merge(&mut self, patch: Self::Patch);

    /// Built-in records used when nothing (or nothing readable) is persisted.
    fn seed() -> Vec<Self>;

    /// Converts every image slot of `draft` into a persisted reference.
    async fn resolve_images(
        draft: Self::Draft,
        media: &MediaResolver,
    ) -> Result<Self::Patch, ApiError>;
}
