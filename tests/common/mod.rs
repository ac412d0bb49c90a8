//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use catalog_dash::catalog::Product;
use catalog_dash::config::{CatalogConfig, Config};
use std::path::PathBuf;
use tempfile::TempDir;

/// Product JSON in the shape the catalog service returns.
pub fn product_json(id: u64, title: &str, price: f64, created: &str) -> String {
    format!(
        r#"{{"id":{id},"title":"{title}","slug":"{slug}","price":{price},"description":"About {title}","category":{{"id":1,"name":"Clothes","slug":"clothes","image":"https://i.imgur.com/QkIa5tT.jpeg"}},"images":["[\"https://i.imgur.com/a.jpeg\"]"],"creationAt":"{created}","updatedAt":"{created}"}}"#,
        slug = title.to_lowercase().replace(' ', "-"),
    )
}

pub fn product(id: u64, title: &str, price: f64, created: Option<&str>) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("About {title}"),
        category: None,
        images: Vec::new(),
        slug: None,
        creation_at: created.map(str::to_string),
        updated_at: None,
    }
}

/// `n` products titled `P1..Pn` with price equal to the id.
pub fn numbered(n: u64) -> Vec<Product> {
    (1..=n)
        .map(|i| product(i, &format!("P{i}"), i as f64, None))
        .collect()
}

pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Writes `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn default_config() -> Config {
    Config::default()
}
