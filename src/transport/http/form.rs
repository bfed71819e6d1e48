//! Multipart form layout of the real catalog API.
//!
//! Products travel flattened: `<field>_<lang>` text parts for multilingual values,
//! `size_X`/`size_Y`/`size_Z`, file parts `mainImage` / `additionalImages` and URL parts
//! `mainImageUrl` / `additionalImageUrls`. Blob preview handles are never sent.

use crate::domain::error::ApiError;
use crate::domain::model::{
    classify, AdminDraft, FileUpload, ImageInput, ImageKind, Localized, LocalizedInput,
    ProductDraft, Scalar, Size, SUPPORTED_LANGUAGES,
};
use crate::domain::model::Language;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, upload: FileUpload) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(upload),
        }
    }
}

/// A form layout for one entity kind.
pub trait FormLayout {
    type Draft: Serialize;

    fn parse(fields: Vec<FormField>) -> Result<Self::Draft, ApiError>;
}

pub struct ProductForm;
pub struct AdminForm;

impl FormLayout for ProductForm {
    type Draft = ProductDraft;

    fn parse(fields: Vec<FormField>) -> Result<ProductDraft, ApiError> {
        parse_product_form(fields)
    }
}

impl FormLayout for AdminForm {
    type Draft = AdminDraft;

    fn parse(fields: Vec<FormField>) -> Result<AdminDraft, ApiError> {
        parse_admin_form(fields)
    }
}

const TEXT_FIELDS: [&str; 5] = ["name", "description", "material", "code", "title"];
const NUMERIC_FIELDS: [&str; 3] = ["price", "discountPercent", "discountPrice"];

// Falsy values (empty text, zero) are left out of the form.
fn is_sent(value: &Scalar) -> bool {
    match value {
        Scalar::Text(s) => !s.is_empty(),
        Scalar::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
    }
}

fn push_localized(out: &mut Vec<FormField>, field: &str, value: &Option<LocalizedInput>) {
    if let Some(input) = value {
        let localized = input.clone().into_localized();
        for (language, v) in localized.iter() {
            if is_sent(v) {
                out.push(FormField::text(format!("{}_{}", field, language), v.to_string()));
            }
        }
    }
}

fn push_image(out: &mut Vec<FormField>, file_name: &str, url_name: &str, input: &ImageInput) {
    match input {
        ImageInput::Upload(upload) => out.push(FormField::file(file_name, upload.clone())),
        ImageInput::Reference(reference) if classify(reference) != ImageKind::Blob => {
            out.push(FormField::text(url_name, reference.clone()))
        }
        ImageInput::Reference(_) => {}
    }
}

fn dimension_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Flattens a product draft into the multipart layout of the real API.
pub fn product_form_fields(draft: &ProductDraft) -> Vec<FormField> {
    let mut out = Vec::new();
    push_localized(&mut out, "name", &draft.name);
    push_localized(&mut out, "price", &draft.price);
    push_localized(&mut out, "description", &draft.description);
    push_localized(&mut out, "material", &draft.material);
    push_localized(&mut out, "code", &draft.code);
    push_localized(&mut out, "title", &draft.title);
    push_localized(&mut out, "discountPercent", &draft.discount_percent);
    push_localized(&mut out, "discountPrice", &draft.discount_price);

    if let Some(size) = &draft.size {
        out.push(FormField::text("size_X", dimension_text(size.x)));
        out.push(FormField::text("size_Y", dimension_text(size.y)));
        out.push(FormField::text("size_Z", dimension_text(size.z)));
    }

    if let Some(main_image) = &draft.main_image {
        push_image(&mut out, "mainImage", "mainImageUrl", main_image);
    }
    if let Some(images) = &draft.additional_images {
        for image in images {
            push_image(&mut out, "additionalImages", "additionalImageUrls", image);
        }
    }
    out
}

/// Flattens an admin draft: `username`, `email`, and `image` (file) or `imageUrl`.
pub fn admin_form_fields(draft: &AdminDraft) -> Vec<FormField> {
    let mut out = Vec::new();
    if let Some(username) = &draft.username {
        out.push(FormField::text("username", username.clone()));
    }
    if let Some(email) = &draft.email {
        out.push(FormField::text("email", email.clone()));
    }
    if let Some(image) = &draft.image {
        push_image(&mut out, "image", "imageUrl", image);
    }
    out
}

fn numeric_scalar(text: &str) -> Scalar {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Scalar::Number(i.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Scalar::Number)
        .unwrap_or_else(|| Scalar::Text(text.to_string()))
}

fn parse_dimension(name: &str, text: &str) -> Result<f64, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid number for {}: {:?}", name, text)))
}

fn expect_text(field: FormField) -> Result<(String, String), ApiError> {
    match field.value {
        FormValue::Text(text) => Ok((field.name, text)),
        FormValue::File(_) => Err(ApiError::BadRequest(format!(
            "Unexpected file in form field {}",
            field.name
        ))),
    }
}

fn image_input(value: FormValue) -> ImageInput {
    match value {
        FormValue::File(upload) => ImageInput::Upload(upload),
        FormValue::Text(reference) => ImageInput::Reference(reference),
    }
}

/// Rebuilds a product draft from the multipart layout. Unknown parts are ignored.
pub fn parse_product_form(fields: Vec<FormField>) -> Result<ProductDraft, ApiError> {
    let mut draft = ProductDraft::default();
    let mut localized: Vec<(&'static str, Localized)> = Vec::new();
    let mut size: Option<Size> = None;
    let mut main_file: Option<ImageInput> = None;
    let mut main_url: Option<ImageInput> = None;
    let mut additional: Option<Vec<ImageInput>> = None;

    for field in fields {
        match field.name.as_str() {
            "mainImage" => main_file = Some(image_input(field.value)),
            "mainImageUrl" => {
                let (_, text) = expect_text(field)?;
                main_url = Some(ImageInput::Reference(text));
            }
            "additionalImages" | "additionalImageUrls" => {
                additional
                    .get_or_insert_with(Vec::new)
                    .push(image_input(field.value));
            }
            "size_X" | "size_Y" | "size_Z" => {
                let (name, text) = expect_text(field)?;
                let value = parse_dimension(&name, &text)?;
                let size = size.get_or_insert_with(Size::default);
                match name.as_str() {
                    "size_X" => size.x = value,
                    "size_Y" => size.y = value,
                    _ => size.z = value,
                }
            }
            other => {
                let Some((base, language)) = split_localized(other) else {
                    debug!(field = other, "ignoring unknown form field");
                    continue;
                };
                let (_, text) = expect_text(field)?;
                let value = if NUMERIC_FIELDS.contains(&base) {
                    numeric_scalar(&text)
                } else {
                    Scalar::Text(text)
                };
                match localized.iter_mut().find(|(name, _)| *name == base) {
                    Some((_, entry)) => entry.set(language, value),
                    None => {
                        let mut entry = Localized::default();
                        entry.set(language, value);
                        localized.push((base, entry));
                    }
                }
            }
        }
    }

    for (name, value) in localized {
        let value = Some(LocalizedInput::PerLanguage(value));
        match name {
            "name" => draft.name = value,
            "price" => draft.price = value,
            "description" => draft.description = value,
            "material" => draft.material = value,
            "code" => draft.code = value,
            "title" => draft.title = value,
            "discountPercent" => draft.discount_percent = value,
            _ => draft.discount_price = value,
        }
    }
    draft.size = size;
    draft.main_image = main_file.or(main_url);
    draft.additional_images = additional;
    Ok(draft)
}

fn split_localized(name: &str) -> Option<(&'static str, Language)> {
    let (base, code) = name.rsplit_once('_')?;
    let language = SUPPORTED_LANGUAGES.into_iter().find(|l| l.code() == code)?;
    TEXT_FIELDS
        .into_iter()
        .chain(NUMERIC_FIELDS)
        .find(|f| *f == base)
        .map(|f| (f, language))
}

pub fn parse_admin_form(fields: Vec<FormField>) -> Result<AdminDraft, ApiError> {
    let mut draft = AdminDraft::default();
    let mut image_file: Option<ImageInput> = None;
    let mut image_url: Option<ImageInput> = None;
    for field in fields {
        match field.name.as_str() {
            "username" => draft.username = Some(expect_text(field)?.1),
            "email" => draft.email = Some(expect_text(field)?.1),
            "image" => image_file = Some(image_input(field.value)),
            "imageUrl" => image_url = Some(ImageInput::Reference(expect_text(field)?.1)),
            other => debug!(field = other, "ignoring unknown form field"),
        }
    }
    draft.image = image_file.or(image_url);
    Ok(draft)
}
