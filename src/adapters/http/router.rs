//! Top-level application router.
//!
//! Composes the per-module routers, applies the session middleware, and
//! mounts the admin routes behind the admin credential check. All
//! dependencies are injected through [`RouterDeps`] - no module-scope
//! clients.

use axum::{middleware, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::adapters::http::catalog::{admin_catalog_routes, catalog_routes, CatalogAppState};
use crate::adapters::http::events::{events_routes, EventsAppState};
use crate::adapters::http::membership::{membership_routes, MembershipAppState};
use crate::adapters::http::middleware::{
    admin_auth_middleware, session_middleware, AdminCredential, SessionState,
};
use crate::adapters::http::storefront::{storefront_routes, StorefrontAppState};

/// Everything the router needs, constructed once at process start.
#[derive(Clone)]
pub struct RouterDeps {
    pub session_validator: SessionState,
    pub admin_credential: AdminCredential,
    pub catalog: CatalogAppState,
    pub membership: MembershipAppState,
    pub events: EventsAppState,
    pub storefront: StorefrontAppState,
}

/// Build the full application router.
///
/// # Surface
///
/// - `GET  /health` - liveness probe
/// - `GET  /api/packages`, `GET /api/packages/{slug}`
/// - `GET  /api/essays`, `GET /api/products`
/// - `GET  /api/membership`
/// - `GET  /api/events`, `POST /api/events/{id}/rsvp`
/// - `POST /api/checkout`, `POST /api/subscribe`
/// - `POST /api/admin/essays/reorder` (admin credential required)
pub fn build_router(deps: RouterDeps) -> Router {
    let admin = admin_catalog_routes()
        .route_layer(middleware::from_fn_with_state(
            deps.admin_credential,
            admin_auth_middleware,
        ))
        .with_state(deps.catalog.clone());

    let api = Router::new()
        .merge(catalog_routes().with_state(deps.catalog))
        .merge(storefront_routes().with_state(deps.storefront))
        .nest("/membership", membership_routes().with_state(deps.membership))
        .nest("/events", events_routes().with_state(deps.events))
        .nest("/admin", admin);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            deps.session_validator,
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
