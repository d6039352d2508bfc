//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port with an in-memory token map,
//! avoiding the need for real signed tokens in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal, PrincipalId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of credentials to principals. Credentials not in the map
/// return `InvalidCredential`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid credentials to their principals
    credentials: RwLock<HashMap<String, Principal>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid credential that maps to a principal.
    pub fn with_principal(self, credential: impl Into<String>, principal: Principal) -> Self {
        self.credentials
            .write()
            .unwrap()
            .insert(credential.into(), principal);
        self
    }

    /// Adds a valid credential with a simple test principal.
    pub fn with_test_principal(
        self,
        credential: impl Into<String>,
        principal_id: impl Into<String>,
    ) -> Self {
        let principal_id = principal_id.into();
        let principal = Principal::new(
            PrincipalId::new(&principal_id).unwrap(),
            format!("{}@test.example.com", principal_id),
        );
        self.with_principal(credential, principal)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, credential: &str) -> Result<Principal, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.credentials
            .read()
            .unwrap()
            .get(credential)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}
