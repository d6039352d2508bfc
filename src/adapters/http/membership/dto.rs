//! HTTP DTOs for membership endpoints.

use crate::domain::membership::{Membership, MembershipTier};
use serde::Serialize;

/// Response for the current principal's membership.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    /// The membership details, or null if none exists.
    pub membership: Option<MembershipDto>,
}

/// Membership shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipDto {
    pub id: String,
    pub tier: MembershipTier,
    /// When the membership was created (ISO 8601).
    pub created_at: String,
}

impl From<Membership> for MembershipDto {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            tier: membership.tier,
            created_at: membership.created_at.as_datetime().to_rfc3339(),
        }
    }
}
