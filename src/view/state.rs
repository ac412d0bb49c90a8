use std::num::NonZeroUsize;

use crate::catalog::Product;
use crate::error::{DashError, Result};
use crate::view::sort::{sort_products, SortDirection, SortKey};
use crate::view::window::{page_window, PageWindow};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Filtered, sorted and paginated projection of the product list.
///
/// All mutation goes through the methods below so that
/// `1 <= current_page <= total_pages()` holds after every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    all: Vec<Product>,
    filtered: Vec<Product>,
    search_term: String,
    sort: Option<SortKey>,
    direction: SortDirection,
    page_size: NonZeroUsize,
    current_page: usize,
}

/// Rows and counters for the visible page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: &'a [Product],
    pub total_items: usize,
    pub total_pages: usize,
    /// Zero-based, inclusive.
    pub start_index: usize,
    /// Zero-based, exclusive.
    pub end_index: usize,
    pub current_page: usize,
}

impl PageView<'_> {
    /// One-line summary, e.g. "Showing 11–12 of 12 products".
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            return "No products".to_string();
        }
        format!(
            "Showing {}–{} of {} products",
            self.start_index + 1,
            self.end_index,
            self.total_items
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            sort: None,
            direction: SortDirection::Ascending,
            page_size,
            current_page: 1,
        }
    }

    /// Replaces the product list wholesale.
    ///
    /// The filtered set becomes a copy of the new list and the page resets.
    /// The previous search term is dropped, not reapplied.
    pub fn set_source(&mut self, products: Vec<Product>) {
        self.filtered = products.clone();
        self.all = products;
        self.search_term.clear();
        self.current_page = 1;
    }

    /// Filters by case-insensitive title substring, then re-sorts if a sort
    /// key is active. Resets to page 1.
    pub fn apply_search(&mut self, term: &str) {
        let term = term.trim().to_lowercase();

        self.filtered = if term.is_empty() {
            self.all.clone()
        } else {
            self.all
                .iter()
                .filter(|product| product.title.to_lowercase().contains(&term))
                .cloned()
                .collect()
        };
        self.search_term = term;

        if let Some(key) = self.sort {
            sort_products(&mut self.filtered, key, self.direction);
        }
        self.current_page = 1;
    }

    /// Sorts by `key`; the same key again flips the direction.
    ///
    /// Keeps the current page and does not re-run the search.
    pub fn apply_sort(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.sort = Some(key);
            self.direction = SortDirection::Ascending;
        }
        sort_products(&mut self.filtered, key, self.direction);
    }

    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.page_size = size;
        self.current_page = 1;
    }

    /// Moves to `page`. Out-of-range pages are rejected and leave the state
    /// untouched.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn current_view(&self) -> PageView<'_> {
        let total_items = self.filtered.len();
        let start_index = ((self.current_page - 1) * self.page_size.get()).min(total_items);
        let end_index = (start_index + self.page_size.get()).min(total_items);

        PageView {
            rows: &self.filtered[start_index..end_index],
            total_items,
            total_pages: self.total_pages(),
            start_index,
            end_index,
            current_page: self.current_page,
        }
    }

    pub fn page_window(&self) -> PageWindow {
        page_window(self.total_pages(), self.current_page)
    }

    /// `max(1, ceil(|filtered| / page_size))`
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size.get()).max(1)
    }

    /// Looks `id` up in the full list.
    pub fn find_product(&self, id: u64) -> Result<&Product> {
        self.all
            .iter()
            .find(|product| product.id == id)
            .ok_or(DashError::NotFound { id })
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Normalized term of the last search; empty after `set_source`.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}
