//! Create/edit form input and its validation.

use crate::catalog::{Product, ProductPayload};
use crate::format::clean_image_url;

/// Image used when a new product is submitted without any URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Description,
    CategoryId,
    Images,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Price,
        FormField::Description,
        FormField::CategoryId,
        FormField::Images,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Description => "Description",
            FormField::CategoryId => "Category ID",
            FormField::Images => "Images (one URL per line)",
        }
    }

    /// Enter inserts a newline instead of moving on.
    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Description | FormField::Images)
    }
}

/// Raw text of the form fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub images: String,
}

impl ProductForm {
    /// Pre-fills the edit form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category_id: product
                .category
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            images: product
                .images
                .iter()
                .map(|url| clean_image_url(url))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
            FormField::CategoryId => &self.category_id,
            FormField::Images => &self.images,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::CategoryId => &mut self.category_id,
            FormField::Images => &mut self.images,
        }
    }

    /// Image URLs, one per line, trimmed, blanks dropped.
    pub fn image_urls(&self) -> Vec<String> {
        self.images
            .lines()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checks every field and collects all problems instead of stopping at
    /// the first one.
    pub fn validate(&self) -> Result<ProductPayload, Vec<String>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("Title must not be empty".to_string());
        }

        let price = self.price.trim().parse::<f64>().ok().filter(|p| p.is_finite());
        if !matches!(price, Some(p) if p > 0.0) {
            errors.push("Price must be greater than 0".to_string());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("Description must not be empty".to_string());
        }

        let category_id = self.category_id.trim().parse::<u64>().ok().filter(|id| *id > 0);
        if category_id.is_none() {
            errors.push("Category ID is invalid".to_string());
        }

        match (price, category_id) {
            (Some(price), Some(category_id)) if errors.is_empty() => Ok(ProductPayload {
                title: self.title.clone(),
                price,
                description: self.description.clone(),
                category_id,
                images: self.image_urls(),
            }),
            _ => Err(errors),
        }
    }

    /// Like [`validate`](Self::validate), substituting the placeholder image
    /// when no URL was given.
    pub fn validate_for_create(&self) -> Result<ProductPayload, Vec<String>> {
        let mut payload = self.validate()?;
        if payload.images.is_empty() {
            payload.images = vec![PLACEHOLDER_IMAGE.to_string()];
        }
        Ok(payload)
    }
}
