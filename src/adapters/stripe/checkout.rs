//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe Checkout. The only
//! call this service makes is creating a hosted checkout session; payment
//! collection happens entirely on Stripe's side after redirect.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripeCheckoutAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{CheckoutRequest, CheckoutSession, PaymentError, PaymentProvider};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Response body for a created checkout session.
#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    id: String,
    url: String,
}

/// Error body returned by the Stripe API.
#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: String,
}

/// Stripe checkout adapter.
///
/// Implements `PaymentProvider` against the Stripe REST API with
/// form-encoded requests, as the API expects.
pub struct StripeCheckoutAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeCheckoutAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeCheckoutAdapter {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let mut form: Vec<(&str, String)> = vec![
            ("mode", "payment".to_string()),
            ("line_items[0][price]", request.price_id),
            ("line_items[0][quantity]", request.quantity.to_string()),
            ("success_url", request.success_url),
            ("cancel_url", request.cancel_url),
        ];
        if let Some(email) = request.customer_email {
            form.push(("customer_email", email));
        }

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .form(&form)
            .send()
            .await
            .map_err(|e| PaymentError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let session: CheckoutSessionResponse = response
                .json()
                .await
                .map_err(|e| PaymentError::Unavailable(format!("Malformed response: {}", e)))?;
            return Ok(CheckoutSession {
                id: session.id,
                url: session.url,
            });
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            let message = serde_json::from_str::<StripeErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(PaymentError::Rejected(message));
        }

        Err(PaymentError::Unavailable(format!("HTTP {}", status)))
    }
}
