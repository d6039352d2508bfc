//! Session resolution middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that resolves Bearer credentials and injects
//!   the principal into request extensions
//! - `CurrentPrincipal` - Extractor for optional authentication
//! - `RequirePrincipal` - Extractor that requires a resolved principal
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, keeping it provider-
//! agnostic. Resolution failure degrades to anonymous rather than failing
//! the request - the public read paths apply non-member rules, and
//! endpoints that need a principal reject via `RequirePrincipal`.
//!
//! ```text
//! Request → session_middleware → injects Principal into extensions
//!                                      ↓
//!                       Handler → CurrentPrincipal / RequirePrincipal
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::Principal;
use crate::ports::SessionValidator;

/// Session middleware state - wraps the session validator.
pub type SessionState = Arc<dyn SessionValidator>;

/// Session resolution middleware.
///
/// This middleware:
/// 1. Extracts the Bearer credential from the Authorization header
/// 2. Validates it using the `SessionValidator` port
/// 3. On success, injects `Principal` into request extensions
/// 4. On missing or invalid credential, continues anonymously
///
/// # Credential Extraction
///
/// Expects the credential in the `Authorization` header with `Bearer`
/// prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn session_middleware(
    State(validator): State<SessionState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(credential) = credential {
        match validator.validate(credential).await {
            Ok(principal) => {
                request.extensions_mut().insert(principal);
            }
            Err(e) => {
                // Degrade to anonymous; public routes fall back to
                // non-member rules.
                tracing::debug!(error = %e, "session resolution failed, continuing anonymously");
            }
        }
    }

    next.run(request).await
}

/// Extractor for optional authentication.
///
/// Returns `None` if no valid credential was provided, `Some(principal)`
/// if the session resolved.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(CurrentPrincipal(principal): CurrentPrincipal) -> impl IntoResponse {
///     match principal {
///         Some(p) => format!("Hello, {}!", p.email),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

impl<S> axum::extract::FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let principal = parts.extensions.get::<Principal>().cloned();
            Ok(CurrentPrincipal(principal))
        })
    }
}

/// Extractor that requires a resolved principal.
///
/// Use in handlers that cannot serve anonymous requests. Returns 401
/// if the session middleware did not resolve a principal.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub Principal);

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new("UNAUTHORIZED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequirePrincipal
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(RequirePrincipal)
                .ok_or(AuthenticationRequired)
        })
    }
}
