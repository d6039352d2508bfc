//! Session validation port.
//!
//! Defines the contract for resolving a session credential to a principal.
//!
//! # Design
//!
//! Validation failure is an expected outcome, not an exception: the HTTP
//! session resolver treats any `Err` as "anonymous" so public read paths
//! degrade gracefully. Endpoints that require a principal reject anonymous
//! requests themselves.

use crate::domain::foundation::{AuthError, Principal};
use async_trait::async_trait;

/// Validates session credentials issued by the identity provider.
///
/// # Contract
///
/// Implementations must:
/// - Return the principal for a valid, unexpired credential
/// - Return `AuthError::InvalidCredential` / `CredentialExpired` otherwise
/// - Return `AuthError::ProviderUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer credential and resolve the principal.
    async fn validate(&self, credential: &str) -> Result<Principal, AuthError>;
}
