//! CSV export of the visible page.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::catalog::Product;
use crate::error::{DashError, Result};

pub const CSV_HEADERS: [&str; 10] = [
    "ID",
    "Title",
    "Slug",
    "Price",
    "Category",
    "Category ID",
    "Description",
    "Images",
    "Created At",
    "Updated At",
];

const BOM: char = '\u{feff}';

/// Quotes `value` when it contains a comma, a quote or a newline.
pub fn escape_csv(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn csv_row(product: &Product) -> String {
    let fields = [
        product.id.to_string(),
        product.title.clone(),
        product.slug.clone().unwrap_or_default(),
        product.price.to_string(),
        product.category.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
        product.category.as_ref().map(|c| c.id.to_string()).unwrap_or_default(),
        product.description.clone(),
        product.images.join("; "),
        product.creation_at.clone().unwrap_or_default(),
        product.updated_at.clone().unwrap_or_default(),
    ];

    fields
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header plus one line per product, prefixed with a UTF-8 BOM.
pub fn render_csv(products: &[Product]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');
    for product in products {
        out.push_str(&csv_row(product));
        out.push('\n');
    }
    out
}

/// `products_page_{page}_{timestamp}.csv`, timestamp in UTC with `:` and `.`
/// replaced by `-`.
pub fn export_file_name(page: usize, now: DateTime<Utc>) -> String {
    let timestamp = now.format("%Y-%m-%dT%H-%M-%S-%3fZ");
    format!("products_page_{page}_{timestamp}.csv")
}

/// Writes `products` to a new file in `dir` and returns its path.
pub fn export_page(
    products: &[Product],
    page: usize,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(page, now));
    fs::write(&path, render_csv(products)).map_err(|e| DashError::Export {
        path: path.clone(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), rows = products.len(), "exported page");
    Ok(path)
}
