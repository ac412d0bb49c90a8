use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::catalog::{CatalogCommand, CatalogCommandSender, CatalogOutcome, Product};
use crate::config::Config;
use crate::error::{DashError, ErrorKind};
use crate::export::export_page;
use crate::form::ProductForm;
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::form::{FormDialogState, FormIntent, FormMode, FormReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeBoard, NoticeLevel};
use crate::view::{SortKey, ViewState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    Normal,
    /// Keys edit the search box.
    Search,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Dashboard state and the adapter between key presses, the view state and
/// the catalog worker.
///
/// The product list is only touched through `ViewState` operations; every
/// create/update/delete is followed by a fresh list fetch.
pub struct App {
    should_quit: bool,
    view: ViewState,
    /// Row index within the visible page.
    selected: usize,
    mode: InputMode,
    search_input: String,
    keep_query_on_reload: bool,
    page_size_options: Vec<NonZeroUsize>,
    export_dir: PathBuf,
    /// Product shown in the detail dialog or targeted by edit/delete.
    current_product_id: Option<u64>,
    loading: bool,
    /// Shown in the table region after a failed list fetch.
    load_error: Option<String>,
    notices: NoticeBoard,
    form: FormDialogState,
    detail: DetailDialogState,
    confirm: ConfirmDialogState,
    commands: Option<CatalogCommandSender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let page_size = NonZeroUsize::new(config.view.page_size).unwrap_or(NonZeroUsize::MIN);
        let mut page_size_options: Vec<NonZeroUsize> = config
            .view
            .page_size_options
            .iter()
            .filter_map(|size| NonZeroUsize::new(*size))
            .collect();
        if !page_size_options.contains(&page_size) {
            page_size_options.push(page_size);
        }
        page_size_options.sort_unstable();
        page_size_options.dedup();

        Self {
            should_quit: false,
            view: ViewState::with_page_size(page_size),
            selected: 0,
            mode: InputMode::Normal,
            search_input: String::new(),
            keep_query_on_reload: config.view.keep_query_on_reload,
            page_size_options,
            export_dir: config
                .export
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            current_product_id: None,
            loading: false,
            load_error: None,
            notices: NoticeBoard::new(Duration::from_secs(config.notices.ttl_seconds)),
            form: FormDialogState::default(),
            detail: DetailDialogState::default(),
            confirm: ConfirmDialogState::default(),
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: CatalogCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn form(&self) -> &FormDialogState {
        &self.form
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn current_product_id(&self) -> Option<u64> {
        self.current_product_id
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.view.current_view().rows.get(self.selected)
    }

    pub fn on_tick(&mut self) {
        self.notices.prune(Instant::now());
    }

    // ========================================================================
    // Catalog round trips
    // ========================================================================

    pub fn request_reload(&mut self) {
        if self.send_command(CatalogCommand::Reload) {
            self.loading = true;
        }
    }

    pub fn on_catalog(&mut self, outcome: CatalogOutcome) {
        self.loading = false;
        match outcome {
            CatalogOutcome::Loaded(products) => {
                self.load_error = None;
                self.view.set_source(products);
                if self.keep_query_on_reload && !self.search_input.trim().is_empty() {
                    self.view.apply_search(&self.search_input);
                } else {
                    self.search_input.clear();
                }
                self.selected = 0;
            }
            CatalogOutcome::LoadFailed(error) => {
                self.view.set_source(Vec::new());
                self.selected = 0;
                self.load_error = Some(format!("Failed to load data: {}", error.user_message()));
                self.notices.push(
                    NoticeLevel::Danger,
                    "Could not load the product list. Please try again!",
                );
            }
            CatalogOutcome::Fetched(product) => {
                self.dispatch_detail(DetailIntent::Refresh { product });
            }
            CatalogOutcome::Created(_) => {
                self.notices.push(NoticeLevel::Success, "Product created successfully!");
                self.dispatch_form(FormIntent::Close);
                self.request_reload();
            }
            CatalogOutcome::Updated(product) => {
                self.notices.push(NoticeLevel::Success, "Product updated successfully!");
                self.dispatch_form(FormIntent::Close);
                self.dispatch_detail(DetailIntent::Refresh { product });
                self.request_reload();
            }
            CatalogOutcome::Deleted { id } => {
                self.notices.push(NoticeLevel::Success, "Product deleted successfully!");
                if self.detail.product_id() == Some(id) {
                    self.dispatch_detail(DetailIntent::Close);
                }
                if self.current_product_id == Some(id) {
                    self.current_product_id = None;
                }
                self.request_reload();
            }
            CatalogOutcome::Failed { action, error } => match error.kind() {
                ErrorKind::NotFound => {
                    self.notices.push(NoticeLevel::Danger, error.user_message());
                }
                ErrorKind::Validation => {
                    let message = error.user_message();
                    self.notices
                        .push(NoticeLevel::Danger, format!("Failed to {action} product: {message}"));
                    // Keep the form open with the service's reason inline.
                    self.dispatch_form(FormIntent::ShowErrors {
                        errors: vec![message],
                    });
                }
                _ => {
                    self.notices.push(
                        NoticeLevel::Danger,
                        format!("Failed to {action} product: {}", error.user_message()),
                    );
                }
            },
        }
    }

    // ========================================================================
    // Search, sort, pagination
    // ========================================================================

    pub fn start_search(&mut self) {
        self.mode = InputMode::Search;
    }

    pub fn finish_search(&mut self) {
        self.mode = InputMode::Normal;
    }

    /// Esc in the search box: empty it and show everything again.
    pub fn cancel_search(&mut self) {
        self.mode = InputMode::Normal;
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.apply_search();
        }
    }

    pub fn search_push(&mut self, text: &str) {
        self.search_input.push_str(text);
        self.apply_search();
    }

    pub fn search_backspace(&mut self) {
        if self.search_input.pop().is_some() {
            self.apply_search();
        }
    }

    fn apply_search(&mut self) {
        self.view.apply_search(&self.search_input);
        self.selected = 0;
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.view.apply_sort(key);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.view.go_to_page(page);
        if moved {
            self.selected = 0;
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.view.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.view.current_page().saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.view.total_pages())
    }

    /// Steps through the configured page sizes; stays put at either end.
    pub fn cycle_page_size(&mut self, step: isize) {
        let current = self.view.page_size();
        let index = self
            .page_size_options
            .iter()
            .position(|size| *size == current)
            .unwrap_or(0) as isize;
        let last = self.page_size_options.len() as isize - 1;
        let next = (index + step).clamp(0, last.max(0)) as usize;
        if let Some(size) = self.page_size_options.get(next).copied() {
            if size != current {
                self.view.set_page_size(size);
                self.selected = 0;
            }
        }
    }

    pub fn move_selection(&mut self, step: isize) {
        let rows = self.view.current_view().rows.len();
        if rows == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + step).clamp(0, rows as isize - 1);
        self.selected = next as usize;
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Opens the detail dialog for the selected row.
    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_product().map(|p| p.id) {
            self.open_detail_by_id(id);
        }
    }

    pub fn open_detail_by_id(&mut self, id: u64) {
        match self.view.find_product(id) {
            Ok(product) => {
                let product = product.clone();
                self.current_product_id = Some(id);
                self.dispatch_detail(DetailIntent::Open { product });
            }
            Err(error) => self.notices.push(NoticeLevel::Danger, error.user_message()),
        }
    }

    pub fn close_detail(&mut self) {
        self.dispatch_detail(DetailIntent::Close);
    }

    /// Re-reads the product shown in the detail dialog from the service.
    pub fn refresh_detail(&mut self) {
        if let Some(id) = self.detail.product_id() {
            self.send_command(CatalogCommand::Fetch { id });
        }
    }

    pub fn open_create(&mut self) {
        self.dispatch_form(FormIntent::OpenCreate);
    }

    /// Opens the edit form for the product in the detail dialog, or the
    /// selected row when no dialog is open.
    pub fn open_edit(&mut self) {
        let Some(id) = self.target_product_id() else {
            return;
        };
        match self.view.find_product(id) {
            Ok(product) => {
                let form = ProductForm::from_product(product);
                self.current_product_id = Some(id);
                self.dispatch_detail(DetailIntent::Close);
                self.dispatch_form(FormIntent::OpenEdit { id, form });
            }
            Err(error) => self.notices.push(NoticeLevel::Danger, error.user_message()),
        }
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Validates the open form and sends it to the catalog.
    pub fn submit_form(&mut self) {
        if self.loading {
            tracing::debug!("submit ignored while a request is in flight");
            return;
        }
        let FormDialogState::Visible { mode, form, .. } = &self.form else {
            return;
        };
        let mode = *mode;
        let validated = match mode {
            FormMode::Create => form.validate_for_create(),
            FormMode::Edit { .. } => form.validate(),
        };

        match validated {
            Ok(payload) => {
                let command = match mode {
                    FormMode::Create => CatalogCommand::Create { payload },
                    FormMode::Edit { id } => CatalogCommand::Update { id, payload },
                };
                if self.send_command(command) {
                    self.loading = true;
                }
            }
            Err(messages) => {
                let error = DashError::Validation {
                    messages: messages.clone(),
                };
                self.notices.push(NoticeLevel::Danger, error.user_message());
                self.dispatch_form(FormIntent::ShowErrors { errors: messages });
            }
        }
    }

    /// Asks for confirmation before deleting the targeted product.
    pub fn request_delete(&mut self) {
        let Some(id) = self.target_product_id() else {
            return;
        };
        match self.view.find_product(id) {
            Ok(product) => {
                let title = product.title.clone();
                self.dispatch_confirm(ConfirmIntent::AskDelete { id, title });
            }
            Err(error) => self.notices.push(NoticeLevel::Danger, error.user_message()),
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.confirm.pending_id() else {
            return;
        };
        self.dispatch_confirm(ConfirmIntent::Dismiss);
        if self.send_command(CatalogCommand::Delete { id }) {
            self.loading = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Dismiss);
    }

    /// Writes the visible page (not the whole filtered set) to a CSV file.
    pub fn export_csv(&mut self) {
        let view = self.view.current_view();
        if view.rows.is_empty() {
            self.notices.push(NoticeLevel::Warning, "No data to export!");
            return;
        }

        let rows = view.rows.len();
        match export_page(view.rows, view.current_page, &self.export_dir, Utc::now()) {
            Ok(path) => self.notices.push(
                NoticeLevel::Success,
                format!("Exported {} products to {}", rows, path.display()),
            ),
            Err(error) => self.notices.push(NoticeLevel::Danger, error.user_message()),
        }
    }

    fn target_product_id(&self) -> Option<u64> {
        self.detail
            .product_id()
            .or_else(|| self.selected_product().map(|p| p.id))
    }

    fn send_command(&mut self, command: CatalogCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "catalog command not sent");
                self.notices
                    .push(NoticeLevel::Danger, format!("Catalog worker unavailable: {err}"));
                false
            }
        }
    }
}
