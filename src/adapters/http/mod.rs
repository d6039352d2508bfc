//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter (DTOs, handlers, routes);
//! `router` composes them into the full application router.

pub mod catalog;
pub mod error;
pub mod events;
pub mod membership;
pub mod middleware;
pub mod router;
pub mod storefront;

// Re-export key types for convenience
pub use catalog::CatalogAppState;
pub use error::{ApiError, ErrorResponse};
pub use events::EventsAppState;
pub use membership::MembershipAppState;
pub use router::{build_router, RouterDeps};
pub use storefront::StorefrontAppState;
