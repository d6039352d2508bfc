//! Membership domain module.
//!
//! Membership records assert a principal's subscription tier. The access
//! decision combines membership presence with a resource's visibility flag
//! to gate non-member access to unpublished content.
//!
//! # Module Structure
//!
//! - `access` - AccessDecision and VisibilityFilter (the pure gate)
//! - `membership` - Membership record
//! - `tier` - MembershipTier subscription levels

mod access;
mod membership;
mod tier;

pub use access::{AccessDecision, VisibilityFilter};
pub use membership::Membership;
pub use tier::MembershipTier;
