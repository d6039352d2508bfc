//! Membership tier definitions.
//!
//! Represents the subscription tier levels available on Wine With Pete.

use serde::{Deserialize, Serialize};

/// Membership subscription tier.
///
/// Tiers shape pricing and response presentation; content gating treats
/// every tier equally (any membership sees unpublished content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    /// Free tier - newsletter and early essay access.
    Free,

    /// Premium tier - quarterly wine packages included.
    Premium,

    /// Founder tier - everything in premium plus founder events.
    Founder,
}

impl MembershipTier {
    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, MembershipTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Free => "Free",
            MembershipTier::Premium => "Premium",
            MembershipTier::Founder => "Founder",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more benefits. Used for upgrade validation.
    pub fn rank(&self) -> u8 {
        match self {
            MembershipTier::Free => 0,
            MembershipTier::Premium => 1,
            MembershipTier::Founder => 2,
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
