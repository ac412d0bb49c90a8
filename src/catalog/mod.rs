//! Remote catalog API: entity types, HTTP client and background worker.

mod client;
mod types;
pub mod worker;

pub use client::CatalogClient;
pub use types::{Category, Product, ProductPayload};
pub(crate) use types::parse_timestamp;
pub use worker::{run_worker, CatalogCommand, CatalogCommandSender, CatalogOutcome};
