//! HTTP adapter for storefront endpoints (checkout, newsletter).

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::StorefrontAppState;
pub use routes::storefront_routes;
