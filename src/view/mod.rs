//! Client-side view state: search, sort and pagination over the product list.
//!
//! Rendering-agnostic; the UI reads `current_view()` and `page_window()` after
//! each mutation.

mod sort;
mod state;
mod window;

pub use sort::{compare, sort_products, SortDirection, SortKey};
pub use state::{PageView, ViewState};
pub use window::{page_window, PageItem, PageWindow, MAX_VISIBLE_PAGES};
