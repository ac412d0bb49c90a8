//! Dashboard state driven end-to-end through the catalog worker.

mod common;

use catalog_dash::catalog::{run_worker, CatalogClient, CatalogOutcome};
use catalog_dash::config::Config;
use catalog_dash::form::FormField;
use catalog_dash::ui::app::App;
use catalog_dash::ui::events::AppEvent;
use catalog_dash::ui::form::{FormDialogState, FormIntent};
use catalog_dash::ui::notice::NoticeLevel;
use common::mock_catalog::{MockCatalog, MockResponse};
use common::{catalog_config, product_json};
use std::sync::mpsc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc as tokio_mpsc;

struct Harness {
    app: App,
    events: mpsc::Receiver<AppEvent>,
    mock: MockCatalog,
}

impl Harness {
    async fn start(config: Config) -> Self {
        let mock = MockCatalog::start().await;
        let client = CatalogClient::new(&catalog_config(&mock.base_url())).unwrap();
        let (event_tx, events) = mpsc::channel();
        let (command_tx, command_rx) = tokio_mpsc::channel(8);
        tokio::spawn(run_worker(client, command_rx, event_tx));

        let mut app = App::new(&config);
        app.set_command_sender(command_tx);
        Self { app, events, mock }
    }

    /// Feeds the next catalog outcome into the app, the way the UI loop does.
    fn pump(&mut self) -> CatalogOutcome {
        loop {
            match self.events.recv_timeout(Duration::from_secs(5)) {
                Ok(AppEvent::Catalog(outcome)) => return outcome,
                Ok(_) => continue,
                Err(err) => panic!("no catalog outcome: {err}"),
            }
        }
    }

    fn pump_into_app(&mut self) {
        let outcome = self.pump();
        self.app.on_catalog(outcome);
    }
}

fn list_body(count: u64) -> String {
    let items: Vec<String> = (1..=count)
        .map(|i| product_json(i, &format!("Item {i}"), i as f64, "2024-01-01T00:00:00.000Z"))
        .collect();
    format!("[{}]", items.join(","))
}

#[tokio::test(flavor = "multi_thread")]
async fn initial_load_fills_table() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(12))).await;

    h.app.request_reload();
    assert!(h.app.is_loading());
    h.pump_into_app();

    assert!(!h.app.is_loading());
    assert_eq!(h.app.view().all().len(), 12);
    assert_eq!(h.app.view().current_view().rows.len(), 10);
    assert_eq!(
        h.app.view().current_view().summary(),
        "Showing 1–10 of 12 products"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_load_shows_error_and_empty_table() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::status(503, "{}")).await;

    h.app.request_reload();
    h.pump_into_app();

    assert!(h.app.view().all().is_empty());
    let error = h.app.load_error().unwrap();
    assert!(error.contains("HTTP error! status: 503"));
    assert_eq!(
        h.app.notices().latest().map(|n| n.level),
        Some(NoticeLevel::Danger)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_reload() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(2))).await;
    h.app.request_reload();
    h.pump_into_app();

    h.app.open_create();
    for ch in "Desk".chars() {
        h.app.dispatch_form(FormIntent::Input(ch));
    }
    h.app.dispatch_form(FormIntent::NextField);
    h.app.dispatch_form(FormIntent::Paste("12.5".to_string()));
    h.app.dispatch_form(FormIntent::NextField);
    h.app.dispatch_form(FormIntent::Paste("Oak desk".to_string()));
    h.app.dispatch_form(FormIntent::NextField);
    h.app.dispatch_form(FormIntent::Input('3'));

    h.mock
        .enqueue(MockResponse::json(product_json(
            3,
            "Desk",
            12.5,
            "2024-02-01T00:00:00.000Z",
        )))
        .await;
    h.mock.enqueue(MockResponse::json(list_body(3))).await;

    h.app.submit_form();
    h.pump_into_app();
    assert!(!h.app.form().is_visible());
    assert_eq!(
        h.app.notices().latest().map(|n| n.message.as_str()),
        Some("Product created successfully!")
    );

    h.pump_into_app();
    assert_eq!(h.app.view().all().len(), 3);

    let requests = h.mock.requests().await;
    let create = &requests[1];
    assert_eq!(create.method, "POST");
    let body = create.json();
    assert_eq!(body["title"], "Desk");
    assert_eq!(body["price"], 12.5);
    assert_eq!(body["categoryId"], 3);
    assert_eq!(body["images"][0], "https://via.placeholder.com/150");
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_form_is_prefilled() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(3))).await;
    h.app.request_reload();
    h.pump_into_app();

    h.app.move_selection(1);
    h.app.open_edit();
    match h.app.form() {
        FormDialogState::Visible { form, focused, .. } => {
            assert_eq!(form.title, "Item 2");
            assert_eq!(form.category_id, "1");
            assert_eq!(*focused, FormField::Title);
        }
        FormDialogState::Hidden => panic!("edit form not opened"),
    }
    assert_eq!(h.app.current_product_id(), Some(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_confirm_then_reload() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(3))).await;
    h.app.request_reload();
    h.pump_into_app();

    h.app.open_detail();
    assert_eq!(h.app.detail().product_id(), Some(1));

    h.app.request_delete();
    h.mock.enqueue(MockResponse::json("true")).await;
    h.mock.enqueue(MockResponse::json(list_body(2))).await;
    h.app.confirm_delete();

    h.pump_into_app();
    assert!(!h.app.detail().is_visible());
    h.pump_into_app();
    assert_eq!(h.app.view().all().len(), 2);

    let requests = h.mock.requests().await;
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/v1/products/1");
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_detail_uses_single_product_fetch() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(2))).await;
    h.app.request_reload();
    h.pump_into_app();

    h.app.open_detail_by_id(2);
    h.mock
        .enqueue(MockResponse::json(product_json(
            2,
            "Renamed",
            9.0,
            "2024-01-01T00:00:00.000Z",
        )))
        .await;
    h.app.refresh_detail();
    h.pump_into_app();

    let requests = h.mock.requests().await;
    assert_eq!(requests[1].path, "/api/v1/products/2");
    match h.app.detail() {
        catalog_dash::ui::detail::DetailDialogState::Visible { product } => {
            assert_eq!(product.title, "Renamed");
        }
        _ => panic!("detail closed"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_product_reports_not_found() {
    let mut h = Harness::start(Config::default()).await;
    h.mock.enqueue(MockResponse::json(list_body(2))).await;
    h.app.request_reload();
    h.pump_into_app();

    h.app.open_detail_by_id(99);
    assert!(!h.app.detail().is_visible());
    assert_eq!(
        h.app.notices().latest().map(|n| n.message.as_str()),
        Some("Product not found!")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn export_writes_visible_page() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.export.directory = Some(dir.path().to_path_buf());

    let mut h = Harness::start(config).await;
    h.mock.enqueue(MockResponse::json(list_body(12))).await;
    h.app.request_reload();
    h.pump_into_app();
    assert!(h.app.next_page());

    h.app.export_csv();

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("products_page_2_"));
    let content = std::fs::read_to_string(&files[0]).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn export_of_empty_page_warns() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.export.directory = Some(dir.path().to_path_buf());

    let mut h = Harness::start(config).await;
    h.app.export_csv();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    let notice = h.app.notices().latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "No data to export!");
}
