//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration
///
/// Covers both the session credential validation (JWTs issued by the
/// identity provider, HS256-signed with a shared secret) and the static
/// admin bearer credential for data-management endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify session JWT signatures
    pub jwt_secret: SecretString,

    /// Expected token issuer, if the provider sets one
    #[serde(default)]
    pub issuer: Option<String>,

    /// Static bearer credential for admin endpoints
    pub admin_token: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.admin_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ADMIN_TOKEN"));
        }
        if self.admin_token.expose_secret().len() < 32 {
            return Err(ValidationError::AdminTokenTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(jwt_secret: &str, admin_token: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(jwt_secret.to_string()),
            issuer: None,
            admin_token: SecretString::new(admin_token.to_string()),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        let cfg = config(
            "0123456789abcdef0123456789abcdef",
            "fedcba9876543210fedcba9876543210",
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn short_jwt_secret_fails_validation() {
        let cfg = config("too-short", "fedcba9876543210fedcba9876543210");
        assert!(matches!(cfg.validate(), Err(ValidationError::JwtSecretTooShort)));
    }

    #[test]
    fn short_admin_token_fails_validation() {
        let cfg = config("0123456789abcdef0123456789abcdef", "short");
        assert!(matches!(cfg.validate(), Err(ValidationError::AdminTokenTooShort)));
    }

    #[test]
    fn missing_jwt_secret_fails_validation() {
        let cfg = config("", "fedcba9876543210fedcba9876543210");
        assert!(matches!(
            cfg.validate(),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        ));
    }
}
