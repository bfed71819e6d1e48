use super::{Entity, EntityKind, ImageInput, ImageRef};
use crate::domain::error::ApiError;
use crate::media::MediaResolver;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An administrator account shown in the admin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "I: Deserialize<'de>"))]
pub struct AdminFields<I> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<I>,
}

pub type AdminDraft = AdminFields<ImageInput>;
pub type AdminPatch = AdminFields<ImageRef>;

impl<I> Default for AdminFields<I> {
    fn default() -> Self {
        Self {
            username: None,
            email: None,
            image: None,
        }
    }
}

#[async_trait]
impl Entity for Admin {
    const KIND: EntityKind = EntityKind::Admin;

    type Draft = AdminDraft;
    type Patch = AdminPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, patch: AdminPatch) -> Self {
        Self {
            id,
            username: patch.username.unwrap_or_default(),
            email: patch.email.unwrap_or_default(),
            image: patch.image.unwrap_or_default(),
        }
    }

    fn merge(&mut self, patch: AdminPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }

    fn seed() -> Vec<Self> {
        super::seed::initial_admins()
    }

    async fn resolve_images(draft: AdminDraft, media: &MediaResolver) -> Result<AdminPatch, ApiError> {
        let image = match draft.image {
            Some(input) => Some(media.resolve(input).await?),
            None => None,
        };
        Ok(AdminFields {
            username: draft.username,
            email: draft.email,
            image,
        })
    }
}
