//! HTTP adapter for membership endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::MembershipAppState;
pub use routes::membership_routes;
