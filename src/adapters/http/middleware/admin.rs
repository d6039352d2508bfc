//! Admin authentication middleware.
//!
//! The data-management endpoints are gated by a static bearer credential
//! configured at deploy time, compared in constant time.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ErrorResponse;

/// The expected admin bearer credential.
#[derive(Clone)]
pub struct AdminCredential(Arc<SecretString>);

impl AdminCredential {
    /// Creates the credential holder from the configured token.
    pub fn new(token: SecretString) -> Self {
        Self(Arc::new(token))
    }

    /// Constant-time comparison against a presented token.
    fn matches(&self, presented: &str) -> bool {
        let expected = self.0.expose_secret().as_bytes();
        expected.ct_eq(presented.as_bytes()).into()
    }
}

/// Middleware gating admin routes on the configured bearer credential.
///
/// Returns 401 on a missing or mismatched credential; the session
/// middleware's degrade-to-anonymous behavior does not apply here.
pub async fn admin_auth_middleware(
    State(credential): State<AdminCredential>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match presented {
        Some(token) if credential.matches(token) => next.run(request).await,
        _ => {
            let error = ErrorResponse::new("UNAUTHORIZED", "Admin credential required");
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
    }
}
