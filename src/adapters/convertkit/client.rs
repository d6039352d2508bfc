//! ConvertKit mailing-list adapter.
//!
//! Implements the `NewsletterClient` port against the ConvertKit v3 API.
//! One call: add a subscriber to the configured form. Confirmation emails
//! and delivery are ConvertKit's concern.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{NewsletterClient, NewsletterError, SubscribeRequest};

/// ConvertKit API configuration.
#[derive(Clone)]
pub struct ConvertKitConfig {
    /// ConvertKit API key.
    api_key: SecretString,

    /// Form id subscribers are added to.
    form_id: String,

    /// Base URL for the ConvertKit API (default: https://api.convertkit.com).
    api_base_url: String,
}

impl ConvertKitConfig {
    /// Create a new ConvertKit configuration.
    pub fn new(api_key: SecretString, form_id: impl Into<String>) -> Self {
        Self {
            api_key,
            form_id: form_id.into(),
            api_base_url: "https://api.convertkit.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Request body for the form subscribe endpoint.
#[derive(Debug, Serialize)]
struct SubscribeBody<'a> {
    api_key: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
}

/// ConvertKit client.
pub struct ConvertKitClient {
    config: ConvertKitConfig,
    http_client: reqwest::Client,
}

impl ConvertKitClient {
    /// Create a new ConvertKit client with the given configuration.
    pub fn new(config: ConvertKitConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NewsletterClient for ConvertKitClient {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError> {
        let url = format!(
            "{}/v3/forms/{}/subscribe",
            self.config.api_base_url, self.config.form_id
        );

        let body = SubscribeBody {
            api_key: self.config.api_key.expose_secret(),
            email: &request.email,
            first_name: request.first_name.as_deref(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NewsletterError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            return Err(NewsletterError::Rejected(format!("HTTP {}: {}", status, body)));
        }

        Err(NewsletterError::Unavailable(format!("HTTP {}", status)))
    }
}
