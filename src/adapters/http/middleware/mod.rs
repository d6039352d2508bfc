//! HTTP middleware and extractors.

mod admin;
mod session;

pub use admin::{admin_auth_middleware, AdminCredential};
pub use session::{
    session_middleware, AuthenticationRequired, CurrentPrincipal, RequirePrincipal, SessionState,
};
