use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Product;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Price,
    CreationAt,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Price => "price",
            SortKey::CreationAt => "created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Ascending comparison of two products by `key`.
///
/// Missing or unparseable creation timestamps compare as the Unix epoch.
pub fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Title => collation_key(&a.title).cmp(&collation_key(&b.title)),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::CreationAt => creation_millis(a).cmp(&creation_millis(b)),
    }
}

/// Stable in-place sort; equal elements keep their relative order in both
/// directions.
pub fn sort_products(products: &mut [Product], key: SortKey, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = compare(key, a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Lowercased, decomposed title with combining marks dropped, so `Éclair`
/// files next to `eclair` rather than after `z`.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn creation_millis(product: &Product) -> i64 {
    product
        .created_at()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64, created: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
            slug: None,
            creation_at: created.map(str::to_string),
            updated_at: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn title_ignores_case() {
        let mut items = vec![product(1, "banana", 1.0, None), product(2, "Apple", 1.0, None)];
        sort_products(&mut items, SortKey::Title, SortDirection::Ascending);
        assert_eq!(ids(&items), vec![2, 1]);
    }

    #[test]
    fn title_places_accented_letters_with_their_base() {
        let mut items = vec![
            product(1, "Zebra", 1.0, None),
            product(2, "Éclair", 1.0, None),
            product(3, "apple", 1.0, None),
        ];
        sort_products(&mut items, SortKey::Title, SortDirection::Ascending);
        assert_eq!(ids(&items), vec![3, 2, 1]);
        assert_eq!(collation_key("Crème Brûlée"), "creme brulee");
    }

    #[test]
    fn creation_accepts_offsetless_and_date_only_values() {
        let mut items = vec![
            product(1, "later", 1.0, Some("2024-06-01T00:00:00.000Z")),
            product(2, "nooffset", 1.0, Some("2023-01-01T00:00:00")),
            product(3, "none", 1.0, None),
            product(4, "dateonly", 1.0, Some("2022-01-01")),
        ];
        sort_products(&mut items, SortKey::CreationAt, SortDirection::Ascending);
        assert_eq!(ids(&items), vec![3, 4, 2, 1]);
    }

    #[test]
    fn ties_keep_original_order_both_directions() {
        let mut items = vec![
            product(1, "a", 5.0, None),
            product(2, "b", 5.0, None),
            product(3, "c", 1.0, None),
        ];
        sort_products(&mut items, SortKey::Price, SortDirection::Ascending);
        assert_eq!(ids(&items), vec![3, 1, 2]);
        sort_products(&mut items, SortKey::Price, SortDirection::Descending);
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn missing_creation_sorts_as_epoch() {
        let mut items = vec![
            product(1, "a", 1.0, Some("2024-05-01T00:00:00.000Z")),
            product(2, "b", 1.0, None),
            product(3, "c", 1.0, Some("not a date")),
            product(4, "d", 1.0, Some("1969-12-31T00:00:00.000Z")),
        ];
        sort_products(&mut items, SortKey::CreationAt, SortDirection::Ascending);
        assert_eq!(ids(&items), vec![4, 2, 3, 1]);
    }

    #[test]
    fn direction_toggles() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
