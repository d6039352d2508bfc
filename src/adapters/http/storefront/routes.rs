//! Axum router configuration for storefront endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_checkout, subscribe_newsletter, StorefrontAppState};

/// Create the storefront API router.
///
/// # Routes
///
/// - `POST /checkout` - Create a checkout session for a product
/// - `POST /subscribe` - Subscribe to the newsletter
pub fn storefront_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/checkout", post(create_checkout))
        .route("/subscribe", post(subscribe_newsletter))
}
