//! Membership record.

use crate::domain::foundation::{MembershipId, PrincipalId, Timestamp};
use serde::{Deserialize, Serialize};

use super::MembershipTier;

/// A principal's membership record.
///
/// At most one membership exists per principal. Records are created by the
/// subscription flow on first successful payment (or free signup) and are
/// read-only to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Membership ID.
    pub id: MembershipId,

    /// Principal who owns this membership.
    pub principal_id: PrincipalId,

    /// Subscription tier.
    pub tier: MembershipTier,

    /// When the membership was created.
    pub created_at: Timestamp,
}

impl Membership {
    /// Creates a membership record.
    pub fn new(
        id: MembershipId,
        principal_id: PrincipalId,
        tier: MembershipTier,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            principal_id,
            tier,
            created_at,
        }
    }
}
