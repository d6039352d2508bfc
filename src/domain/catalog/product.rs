//! Product resource.

use crate::domain::foundation::{ProductId, Timestamp};
use serde::{Deserialize, Serialize};

/// A storefront product (glassware, merch, one-off bottles).
///
/// Inactive products are retired from the storefront and visible to
/// members only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Description shown on the storefront.
    pub description: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Stripe price identifier used for checkout, if purchasable.
    pub stripe_price_id: Option<String>,

    /// Visibility flag: inactive products are members-only.
    pub is_active: bool,

    /// When the product was created.
    pub created_at: Timestamp,
}

impl Product {
    /// Returns true if the product is visible to non-members.
    pub fn is_visible(&self) -> bool {
        self.is_active
    }

    /// Returns true if the product can be checked out.
    pub fn is_purchasable(&self) -> bool {
        self.is_active && self.stripe_price_id.is_some()
    }
}
