//! JWT adapter for session credential validation.
//!
//! This adapter implements the `SessionValidator` port for the identity
//! provider's HS256-signed session tokens. It validates:
//!
//! - **Signature**: against the shared secret
//! - **Expiry (exp)**: must be in the future
//! - **Issuer (iss)**: must match the configured issuer, when one is set
//!
//! and maps the `sub`/`email` claims to the domain `Principal` type.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, Principal, PrincipalId};
use crate::ports::SessionValidator;

/// Claims carried by the identity provider's session tokens.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    /// Subject - the principal id.
    sub: String,

    /// Principal email address.
    #[serde(default)]
    email: Option<String>,

    /// Expiry timestamp (Unix epoch seconds). Read by the `jsonwebtoken`
    /// validation, kept here so deserialization fails on tokens without it.
    #[allow(dead_code)]
    exp: i64,
}

/// Session validator backed by HS256 JWT verification.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator for tokens signed with the given shared secret.
    ///
    /// When `issuer` is set, tokens must carry a matching `iss` claim.
    pub fn new(secret: &SecretString, issuer: Option<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, credential: &str) -> Result<Principal, AuthError> {
        let token_data = decode::<SessionClaims>(credential, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::CredentialExpired,
                _ => AuthError::InvalidCredential,
            })?;

        let claims = token_data.claims;
        let id = PrincipalId::new(claims.sub).map_err(|_| AuthError::InvalidCredential)?;
        let email = claims.email.unwrap_or_default();

        Ok(Principal::new(id, email))
    }
}
