//! HTTP adapter for event endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::EventsAppState;
pub use routes::events_routes;
