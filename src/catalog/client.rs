use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::catalog::types::{Product, ProductPayload};
use crate::config::CatalogConfig;
use crate::error::{DashError, Result};

/// HTTP client for the remote catalog API.
///
/// One request per call; no retries and no caching. Callers decide what to
/// do with failures.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| DashError::Transport {
                url: base_url.clone(),
                source: e,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.send(self.client.get(&url), &url, None).await?;
        decode(response, &url).await
    }

    pub async fn get_product(&self, id: u64) -> Result<Product> {
        let url = self.product_url(id);
        let response = self.send(self.client.get(&url), &url, Some(id)).await?;
        decode(response, &url).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .send(self.client.post(&url).json(payload), &url, None)
            .await?;
        decode(response, &url).await
    }

    pub async fn update_product(&self, id: u64, payload: &ProductPayload) -> Result<Product> {
        let url = self.product_url(id);
        let response = self
            .send(self.client.put(&url).json(payload), &url, Some(id))
            .await?;
        decode(response, &url).await
    }

    pub async fn delete_product(&self, id: u64) -> Result<()> {
        let url = self.product_url(id);
        self.send(self.client.delete(&url), &url, Some(id)).await?;
        Ok(())
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Sends the request and turns non-success statuses into errors.
    ///
    /// `id` is the product addressed by the request; a 404 on such a request
    /// becomes `NotFound`.
    async fn send(&self, builder: RequestBuilder, url: &str, id: Option<u64>) -> Result<Response> {
        tracing::debug!(url, "catalog request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(url, error = %e, "catalog request failed");
            DashError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(url, status = status.as_u16(), "catalog returned error status");

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(DashError::NotFound { id }),
            (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
                let body = response.text().await.unwrap_or_default();
                Err(DashError::Rejected {
                    status: status.as_u16(),
                    message: rejection_message(&body, status),
                })
            }
            _ => Err(DashError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    response.json::<T>().await.map_err(|e| DashError::Decode {
        url: url.to_string(),
        source: e,
    })
}

/// Pulls the human-readable part out of an error body.
///
/// The service reports `{"message": "..."}` or `{"message": ["...", "..."]}`.
fn rejection_message(body: &str, status: StatusCode) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|v| v.get("message")).and_then(|m| {
        if let Some(text) = m.as_str() {
            return Some(text.to_string());
        }
        m.as_array().map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
    });

    match message {
        Some(message) if !message.is_empty() => message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_reads_string() {
        let msg = rejection_message(r#"{"message": "title should not be empty"}"#, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "title should not be empty");
    }

    #[test]
    fn rejection_message_joins_array() {
        let msg = rejection_message(
            r#"{"message": ["price must be a positive number", "images must contain at least 1 elements"]}"#,
            StatusCode::BAD_REQUEST,
        );
        assert_eq!(
            msg,
            "price must be a positive number; images must contain at least 1 elements"
        );
    }

    #[test]
    fn rejection_message_falls_back_to_status() {
        assert_eq!(rejection_message("", StatusCode::BAD_REQUEST), "status 400");
        assert_eq!(rejection_message("nope", StatusCode::BAD_REQUEST), "nope");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = CatalogConfig {
            base_url: "http://127.0.0.1:9/api/v1/".to_string(),
            ..CatalogConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api/v1");
        assert_eq!(client.product_url(3), "http://127.0.0.1:9/api/v1/products/3");
    }
}
