use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL without trailing slash (e.g., "https://api.escuelajs.co/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Table and pagination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page on startup.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Sizes cycled through with `+` / `-`.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Re-apply the search term after every list fetch instead of clearing it.
    #[serde(default)]
    pub keep_query_on_reload: bool,
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory. Current directory when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Transient notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_notice_ttl")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file path. Defaults to the platform state/cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.escuelajs.co/api/v1".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

fn default_notice_ttl() -> u64 {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            keep_query_on_reload: false,
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_notice_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
