mod common;

use catalog_dash::catalog::Category;
use catalog_dash::error::DashError;
use catalog_dash::export::{export_page, render_csv, CSV_HEADERS};
use chrono::{TimeZone, Utc};
use common::product;
use tempfile::TempDir;

#[test]
fn header_row_follows_bom() {
    let csv = render_csv(&[]);
    assert!(csv.starts_with('\u{feff}'));
    assert_eq!(csv.trim_start_matches('\u{feff}').trim_end(), CSV_HEADERS.join(","));
}

#[test]
fn rows_escape_commas_quotes_and_newlines() {
    let mut item = product(7, "Lamp, \"vintage\"", 12.5, Some("2024-01-02T03:04:05.000Z"));
    item.description = "line one\nline two".to_string();
    item.category = Some(Category {
        id: 3,
        name: "Furniture".to_string(),
    });
    item.images = vec!["https://a/1.png".to_string(), "https://a/2.png".to_string()];

    let csv = render_csv(&[item]);
    let body = csv.split_once('\n').unwrap().1;
    assert_eq!(
        body,
        "7,\"Lamp, \"\"vintage\"\"\",,12.5,Furniture,3,\"line one\nline two\",https://a/1.png; https://a/2.png,2024-01-02T03:04:05.000Z,\n"
    );
}

#[test]
fn export_writes_named_file() {
    let dir = TempDir::new().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

    let path = export_page(&[product(1, "Hat", 9.0, None)], 4, dir.path(), now).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "products_page_4_2024-03-09T14-05-07-000Z.csv"
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("1,Hat,,9,"));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = export_page(&[product(1, "Hat", 9.0, None)], 1, &missing, Utc::now()).unwrap_err();
    assert!(matches!(err, DashError::Export { .. }));
}
