//! Membership reader port.
//!
//! Defines the contract for membership lookup by principal identity.
//!
//! # Design
//!
//! "No membership" and "lookup failed" are distinct outcomes: the former is
//! `Ok(None)` and drives the non-member access path, the latter is a
//! `DomainError` that surfaces as an upstream failure. Conflating them would
//! silently downgrade members during datastore incidents.

use crate::domain::foundation::{DomainError, PrincipalId};
use crate::domain::membership::Membership;
use async_trait::async_trait;

/// Reader port for membership lookups.
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Find the membership owned by a principal.
    ///
    /// At most one membership exists per principal; returns `None` if the
    /// principal has never subscribed.
    async fn find_by_principal(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Option<Membership>, DomainError>;
}
