//! Fixed-locale display formatting for prices, dates and image URLs.

use chrono::Local;

use crate::catalog::parse_timestamp;

const NOT_AVAILABLE: &str = "N/A";

/// `1234.5` -> `$1,234.50`
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

/// `dd/mm/yyyy` in local time, `N/A` when absent or unparseable.
pub fn format_date(value: Option<&str>) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM` in local time, `N/A` when absent or unparseable.
pub fn format_date_time(value: Option<&str>) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Strips the `[`, `]` and `"` artifacts some catalog entries carry.
pub fn clean_image_url(url: &str) -> String {
    url.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect()
}

pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
