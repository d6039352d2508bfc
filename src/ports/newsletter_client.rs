//! Newsletter client port.
//!
//! One call: subscribe an email address to the mailing list. Delivery,
//! confirmation emails, and unsubscribes are owned by the list provider.

use async_trait::async_trait;
use thiserror::Error;

/// Request to subscribe an address to the mailing list.
#[derive(Debug, Clone)]
pub struct SubscribeRequest {
    /// Subscriber email address.
    pub email: String,

    /// Subscriber first name, if provided.
    pub first_name: Option<String>,
}

/// Errors from the mailing-list provider.
#[derive(Debug, Clone, Error)]
pub enum NewsletterError {
    /// The provider rejected the address.
    #[error("Newsletter provider rejected request: {0}")]
    Rejected(String),

    /// The provider could not be reached or returned a server error.
    #[error("Newsletter provider unavailable: {0}")]
    Unavailable(String),
}

/// Port for mailing-list subscription.
#[async_trait]
pub trait NewsletterClient: Send + Sync {
    /// Subscribe an address to the list.
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError>;
}
