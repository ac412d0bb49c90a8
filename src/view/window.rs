/// Maximum number of consecutive page numbers shown.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Page links for the pagination control. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub items: Vec<PageItem>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers in display order, ellipses skipped.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }
}

/// Builds the pagination window around `current_page`.
///
/// Up to [`MAX_VISIBLE_PAGES`] numbers centred on the current page, shifted to
/// stay inside `[1, total_pages]`. When the run does not reach an endpoint,
/// the endpoint is added, separated by an ellipsis if pages are skipped.
pub fn page_window(total_pages: usize, current_page: usize) -> PageWindow {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let span = MAX_VISIBLE_PAGES - 1;

    let mut start = current_page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + span).min(total_pages);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }

    let mut items = Vec::with_capacity(MAX_VISIBLE_PAGES + 4);
    if start > 1 {
        items.push(PageItem::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current_page,
        });
    }

    if end < total_pages {
        if end + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: total_pages,
            active: false,
        });
    }

    PageWindow {
        items,
        current_page,
        total_pages,
    }
}
