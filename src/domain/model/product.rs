use super::{Entity, EntityKind, ImageInput, ImageRef, Localized, LocalizedInput, Size};
use crate::domain::error::ApiError;
use crate::media::MediaResolver;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A catalog product as stored and returned by the mock API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: Localized,
    #[serde(default)]
    pub price: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub material: Localized,
    #[serde(default)]
    pub code: Localized,
    #[serde(default)]
    pub title: Localized,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub discount_percent: Localized,
    #[serde(default)]
    pub discount_price: Localized,
    #[serde(default)]
    pub main_image: ImageRef,
    #[serde(default)]
    pub additional_images: Vec<ImageRef>,
}

/// Product fields as submitted for create/update. Absent fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "I: Deserialize<'de>"))]
pub struct ProductFields<I> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<LocalizedInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<I>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_images: Option<Vec<I>>,
}

pub type ProductDraft = ProductFields<ImageInput>;
pub type ProductPatch = ProductFields<ImageRef>;

impl<I> Default for ProductFields<I> {
    fn default() -> Self {
        Self {
            name: None,
            price: None,
            description: None,
            material: None,
            code: None,
            title: None,
            size: None,
            discount_percent: None,
            discount_price: None,
            main_image: None,
            additional_images: None,
        }
    }
}

fn localized(input: Option<LocalizedInput>) -> Localized {
    input.map(LocalizedInput::into_localized).unwrap_or_default()
}

fn replace(slot: &mut Localized, input: Option<LocalizedInput>) {
    if let Some(input) = input {
        *slot = input.into_localized();
    }
}

#[async_trait]
impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, patch: ProductPatch) -> Self {
        Self {
            id,
            name: localized(patch.name),
            price: localized(patch.price),
            description: localized(patch.description),
            material: localized(patch.material),
            code: localized(patch.code),
            title: localized(patch.title),
            size: patch.size.unwrap_or_default(),
            discount_percent: localized(patch.discount_percent),
            discount_price: localized(patch.discount_price),
            main_image: patch.main_image.unwrap_or_default(),
            additional_images: patch.additional_images.unwrap_or_default(),
        }
    }

    fn merge(&mut self, patch: ProductPatch) {
        replace(&mut self.name, patch.name);
        replace(&mut self.price, patch.price);
        replace(&mut self.description, patch.description);
        replace(&mut self.material, patch.material);
        replace(&mut self.code, patch.code);
        replace(&mut self.title, patch.title);
        replace(&mut self.discount_percent, patch.discount_percent);
        replace(&mut self.discount_price, patch.discount_price);
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(main_image) = patch.main_image {
            self.main_image = main_image;
        }
        if let Some(additional_images) = patch.additional_images {
            self.additional_images = additional_images;
        }
    }

    fn seed() -> Vec<Self> {
        super::seed::initial_products()
    }

    async fn resolve_images(
        draft: ProductDraft,
        media: &MediaResolver,
    ) -> Result<ProductPatch, ApiError> {
        let main_image = match draft.main_image {
            Some(input) => Some(media.resolve(input).await?),
            None => None,
        };
        let additional_images = match draft.additional_images {
            Some(inputs) => Some(media.resolve_all(inputs).await?),
            None => None,
        };
        Ok(ProductFields {
            name: draft.name,
            price: draft.price,
            description: draft.description,
            material: draft.material,
            code: draft.code,
            title: draft.title,
            size: draft.size,
            discount_percent: draft.discount_percent,
            discount_price: draft.discount_price,
            main_image,
            additional_images,
        })
    }
}
