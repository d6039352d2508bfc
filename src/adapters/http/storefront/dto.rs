//! HTTP DTOs for storefront endpoints.

use crate::domain::foundation::ProductId;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a product checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Product being purchased.
    pub product_id: ProductId,
    /// URL to redirect after successful checkout.
    pub success_url: String,
    /// URL to redirect after cancelled checkout.
    pub cancel_url: String,
}

/// Request to subscribe to the newsletter.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeNewsletterRequest {
    /// Subscriber email address.
    pub email: String,
    /// Subscriber first name, if provided.
    #[serde(default)]
    pub first_name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a created checkout session.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Hosted checkout URL to redirect the buyer to.
    pub url: String,
}

/// Response for a newsletter subscription.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
}
