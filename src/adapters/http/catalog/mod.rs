//! HTTP adapter for the content catalog (packages, essays, products)
//! and the admin essay reorder.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::CatalogAppState;
pub use routes::{admin_catalog_routes, catalog_routes};
