//! Axum router configuration for catalog endpoints.
//!
//! This module defines the route structure for the catalog API and wires
//! routes to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_package, list_essays, list_packages, list_products, reorder_essays, CatalogAppState,
};

/// Create the public catalog API router.
///
/// # Routes
///
/// - `GET /packages` - List packages (member-gated visibility)
/// - `GET /packages/{slug}` - Fetch one package (404/403 semantics)
/// - `GET /essays` - List essays in display order
/// - `GET /products` - List storefront products
pub fn catalog_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/:slug", get(get_package))
        .route("/essays", get(list_essays))
        .route("/products", get(list_products))
}

/// Create the admin catalog router.
///
/// Mounted under `/api/admin` behind the admin credential middleware.
///
/// # Routes
///
/// - `POST /essays/reorder` - Bulk display_order update
pub fn admin_catalog_routes() -> Router<CatalogAppState> {
    Router::new().route("/essays/reorder", post(reorder_essays))
}
