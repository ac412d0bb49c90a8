use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Catalog entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub creation_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl Product {
    /// Parsed creation timestamp. `None` when absent or not ISO-8601.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.creation_at.as_deref())
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// First image URL with bracket/quote artifacts stripped.
    pub fn thumbnail(&self) -> Option<String> {
        self.images
            .first()
            .map(|url| crate::format::clean_image_url(url))
    }
}

/// Accepts RFC 3339, a date-time without offset (local time) or a bare
/// date (UTC midnight).
pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: u64,
    pub images: Vec<String>,
}
