//! Membership resolution shared by the gated read paths.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Principal};
use crate::ports::MembershipReader;

/// Resolves whether the requesting principal holds a membership.
///
/// Anonymous requesters are non-members without a lookup. Lookup failures
/// propagate so an unreachable datastore is never mistaken for "not a
/// member".
#[derive(Clone)]
pub struct MembershipGate {
    reader: Arc<dyn MembershipReader>,
}

impl MembershipGate {
    pub fn new(reader: Arc<dyn MembershipReader>) -> Self {
        Self { reader }
    }

    /// Returns true if the principal holds a membership record.
    pub async fn is_member(&self, principal: Option<&Principal>) -> Result<bool, DomainError> {
        match principal {
            None => Ok(false),
            Some(principal) => Ok(self
                .reader
                .find_by_principal(&principal.id)
                .await?
                .is_some()),
        }
    }
}
