//! Webhook publisher.
//!
//! POSTs the exported course JSON as the request body to a configured URL.
//! Any 2xx response counts as delivered; the response body is ignored.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use crate::core::export;
use crate::publish::{PublishError, Publisher};

pub struct WebhookPublisher {
    url: String,
    client: reqwest::Client,
}

impl WebhookPublisher {
    pub fn new(url: String, timeout: Duration) -> Result<Self, PublishError> {
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| PublishError::Config(format!("invalid webhook URL '{url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PublishError::Config(format!(
                "unsupported webhook scheme '{}'",
                parsed.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PublishError::Config(e.to_string()))?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Publisher for WebhookPublisher {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn publish(&self, payload: &str) -> Result<(), PublishError> {
        info!("Posting course export to {} ({} bytes)", self.url, payload.len());

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, export::CONTENT_TYPE)
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        debug!("Webhook response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Webhook error: {} - {}", status, err_body);
            return Err(PublishError::Api {
                status,
                message: err_body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_url() {
        let err = WebhookPublisher::new("not a url".to_string(), Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, PublishError::Config(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = WebhookPublisher::new("ftp://example.com/x".to_string(), Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported webhook scheme"));
    }

    #[test]
    fn test_accepts_https_url() {
        let publisher =
            WebhookPublisher::new("https://example.com/hook".to_string(), Duration::from_secs(1))
                .unwrap();
        assert_eq!(publisher.url(), "https://example.com/hook");
        assert_eq!(publisher.name(), "webhook");
    }
}
