//! Background task that runs catalog requests for the UI.
//!
//! Commands are processed one at a time in arrival order. Responses are
//! posted back on the UI event channel; whichever arrives last wins.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::catalog::client::CatalogClient;
use crate::catalog::types::{Product, ProductPayload};
use crate::error::DashError;
use crate::ui::events::AppEvent;

#[derive(Debug)]
pub enum CatalogCommand {
    Reload,
    Fetch { id: u64 },
    Create { payload: ProductPayload },
    Update { id: u64, payload: ProductPayload },
    Delete { id: u64 },
}

pub type CatalogCommandSender = mpsc::Sender<CatalogCommand>;

#[derive(Debug)]
pub enum CatalogOutcome {
    Loaded(Vec<Product>),
    LoadFailed(DashError),
    Fetched(Product),
    Created(Product),
    Updated(Product),
    Deleted { id: u64 },
    /// A fetch/create/update/delete failed.
    Failed { action: &'static str, error: DashError },
}

pub async fn run_worker(
    client: CatalogClient,
    mut commands: mpsc::Receiver<CatalogCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let outcome = execute(&client, command).await;
        if events.send(AppEvent::Catalog(outcome)).is_err() {
            tracing::trace!("catalog outcome dropped (UI gone)");
            break;
        }
    }
    tracing::debug!("catalog worker stopped");
}

async fn execute(client: &CatalogClient, command: CatalogCommand) -> CatalogOutcome {
    match command {
        CatalogCommand::Reload => match client.list_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "products loaded");
                CatalogOutcome::Loaded(products)
            }
            Err(error) => {
                tracing::error!(%error, "failed to load products");
                CatalogOutcome::LoadFailed(error)
            }
        },
        CatalogCommand::Fetch { id } => match client.get_product(id).await {
            Ok(product) => CatalogOutcome::Fetched(product),
            Err(error) => failed("fetch", error),
        },
        CatalogCommand::Create { payload } => match client.create_product(&payload).await {
            Ok(product) => {
                tracing::info!(id = product.id, "product created");
                CatalogOutcome::Created(product)
            }
            Err(error) => failed("create", error),
        },
        CatalogCommand::Update { id, payload } => {
            match client.update_product(id, &payload).await {
                Ok(product) => {
                    tracing::info!(id, "product updated");
                    CatalogOutcome::Updated(product)
                }
                Err(error) => failed("update", error),
            }
        }
        CatalogCommand::Delete { id } => match client.delete_product(id).await {
            Ok(()) => {
                tracing::info!(id, "product deleted");
                CatalogOutcome::Deleted { id }
            }
            Err(error) => failed("delete", error),
        },
    }
}

fn failed(action: &'static str, error: DashError) -> CatalogOutcome {
    tracing::error!(action, %error, "catalog request failed");
    CatalogOutcome::Failed { action, error }
}
