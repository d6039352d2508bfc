//! Authentication types for the domain layer.
//!
//! These types represent an authenticated principal extracted from a
//! session credential. They have **no external dependencies** - any
//! identity provider can populate them via the `SessionValidator` port.

use super::PrincipalId;
use thiserror::Error;

/// Authenticated principal extracted from a validated session credential.
///
/// This is a **domain type** with no provider dependencies. The identity
/// provider owns account lifecycle; this service only consumes the
/// resolved identity.
#[derive(Debug, Clone)]
pub struct Principal {
    /// The unique identifier from the identity provider.
    pub id: PrincipalId,

    /// Email address from the credential claims.
    pub email: String,
}

impl Principal {
    /// Creates a new principal.
    ///
    /// Typically called by the `SessionValidator` adapter after
    /// successfully validating a session token.
    pub fn new(id: PrincipalId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during credential validation.
///
/// Resolution failures never surface to anonymous read paths - the
/// session resolver degrades to anonymous instead. These errors exist
/// for logging and for endpoints that require a principal.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The credential is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired credential")]
    InvalidCredential,

    /// The credential has expired.
    #[error("Credential expired")]
    CredentialExpired,

    /// The identity provider is unavailable (network, config, etc.).
    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl AuthError {
    /// Creates a provider unavailable error with a message.
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ProviderUnavailable(_))
    }
}
