//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session credential validation (JWT, mock)
//! - `convertkit` - Mailing-list subscription
//! - `http` - Axum routers, DTOs, handlers, middleware
//! - `postgres` - Datastore readers/repositories
//! - `stripe` - Checkout session creation

pub mod auth;
pub mod convertkit;
pub mod http;
pub mod postgres;
pub mod stripe;
