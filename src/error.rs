//! Error types shared by the catalog client, the view state and the UI.
//!
//! Every failure is recovered at the UI boundary and surfaced as a notice.
//! `kind()` groups the variants into the categories the UI reports.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Coarse category of a [`DashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-success HTTP status or transport failure.
    Network,
    /// Field checks failed, locally or on the service side.
    Validation,
    /// Lookup by id found nothing.
    NotFound,
    Config,
    Io,
}

#[derive(Debug, Error)]
pub enum DashError {
    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    /// Service refused the payload (400/422).
    #[error("Catalog rejected the request: {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("Product {id} not found")]
    NotFound { id: u64 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal I/O failed: {source}")]
    Terminal {
        #[source]
        source: std::io::Error,
    },
}

impl DashError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashError::Transport { .. } | DashError::Status { .. } | DashError::Decode { .. } => {
                ErrorKind::Network
            }
            DashError::Rejected { .. } | DashError::Validation { .. } => ErrorKind::Validation,
            DashError::NotFound { .. } => ErrorKind::NotFound,
            DashError::Config(_) => ErrorKind::Config,
            DashError::Export { .. } | DashError::Terminal { .. } => ErrorKind::Io,
        }
    }

    /// Short text for the notification area.
    pub fn user_message(&self) -> String {
        match self {
            DashError::Validation { messages } => messages.join("\n"),
            DashError::NotFound { .. } => "Product not found!".to_string(),
            DashError::Rejected { message, .. } => format!("Catalog rejected the request: {message}"),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = DashError> = std::result::Result<T, E>;
