//! Payment provider port.
//!
//! The storefront's only payment concern is creating a hosted checkout
//! session and redirecting the buyer to it. Everything after redirect
//! (payment collection, receipts, disputes) is owned by the provider.

use async_trait::async_trait;
use thiserror::Error;

/// Request to create a hosted checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Provider price identifier for the item being purchased.
    pub price_id: String,

    /// Quantity to purchase.
    pub quantity: u32,

    /// URL to redirect after successful checkout.
    pub success_url: String,

    /// URL to redirect after cancelled checkout.
    pub cancel_url: String,

    /// Buyer email to prefill, if known.
    pub customer_email: Option<String>,
}

/// A created checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Provider session identifier.
    pub id: String,

    /// Hosted checkout URL to redirect the buyer to.
    pub url: String,
}

/// Errors from the payment provider.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// The provider rejected the request (bad price id, malformed URLs).
    #[error("Payment provider rejected request: {0}")]
    Rejected(String),

    /// The provider could not be reached or returned a server error.
    #[error("Payment provider unavailable: {0}")]
    Unavailable(String),
}

/// Port for creating hosted checkout sessions.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a checkout session and return its hosted URL.
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}
